pub mod admin_delete_comment;
pub mod admin_delete_post;
pub mod admin_get_stats;

pub use admin_delete_comment::admin_delete_comment;
pub use admin_delete_post::admin_delete_post;
pub use admin_get_stats::admin_get_stats;
