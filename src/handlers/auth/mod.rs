pub mod get_session;
pub mod login;
pub mod logout;
pub mod signup;
