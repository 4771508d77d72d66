pub mod follow_user;
pub mod get_user_by_id;
pub mod get_user_profile;
pub mod search_users;
pub mod update_user_password;
pub mod update_user_profile;
pub mod upload_user_avatar;
