pub mod admin_get_session;
pub mod admin_login;
pub mod admin_logout;

pub use admin_get_session::admin_get_session;
pub use admin_login::admin_login;
pub use admin_logout::admin_logout;
