pub mod apply_to_tryout;
pub mod get_my_applications;
pub mod get_tryouts;
