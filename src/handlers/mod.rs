pub mod admin;
pub mod auth;
pub mod drills;
pub mod get_leaderboards;
pub mod health_check;
pub mod messages;
pub mod points;
pub mod posts;
pub mod tryouts;
pub mod users;

pub use admin::{
    admin_adjust_points, admin_create_drill, admin_create_reward, admin_create_tryout,
    admin_delete_comment, admin_delete_drill, admin_delete_post, admin_delete_tryout,
    admin_get_drill_submissions, admin_get_drills, admin_get_redemptions, admin_get_rewards,
    admin_get_session, admin_get_stats, admin_get_tryout_applications, admin_get_tryouts,
    admin_get_users, admin_login, admin_logout, admin_resolve_redemption,
    admin_review_drill_submission, admin_set_user_ban, admin_update_application,
    admin_update_drill, admin_update_reward, admin_update_tryout,
};
pub use auth::get_session::get_session;
pub use auth::login::login;
pub use auth::logout::logout;
pub use auth::signup::signup;
pub use drills::get_drills::get_drills;
pub use drills::get_my_drill_submissions::get_my_drill_submissions;
pub use drills::submit_drill::submit_drill;
pub use get_leaderboards::get_leaderboards;
pub use health_check::health_check;
pub use messages::get_conversations::get_conversations;
pub use messages::get_messages::get_messages;
pub use messages::get_unread_count::get_unread_count;
pub use messages::send_message::send_message;
pub use messages::start_conversation::start_conversation;
pub use points::get_my_redemptions::get_my_redemptions;
pub use points::get_points::get_points;
pub use points::get_rewards::get_rewards;
pub use points::redeem_reward::redeem_reward;
pub use posts::create_comment::create_comment;
pub use posts::create_post::create_post;
pub use posts::delete_post::delete_post;
pub use posts::get_feed::get_feed;
pub use posts::get_post_comments::get_post_comments;
pub use posts::like_post::{like_post, unlike_post};
pub use tryouts::apply_to_tryout::apply_to_tryout;
pub use tryouts::get_my_applications::get_my_applications;
pub use tryouts::get_tryouts::get_tryouts;
pub use users::follow_user::{follow_user, unfollow_user};
pub use users::get_user_by_id::get_user_by_id;
pub use users::get_user_profile::get_user_profile;
pub use users::search_users::search_users;
pub use users::update_user_password::update_user_password;
pub use users::update_user_profile::update_user_profile;
pub use users::upload_user_avatar::upload_user_avatar;
