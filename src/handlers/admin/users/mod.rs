pub mod admin_adjust_points;
pub mod admin_get_users;
pub mod admin_set_user_ban;

pub use admin_adjust_points::admin_adjust_points;
pub use admin_get_users::admin_get_users;
pub use admin_set_user_ban::admin_set_user_ban;
