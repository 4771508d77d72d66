#[path = "drills/mod.rs"]
pub mod drills;
#[path = "moderation/mod.rs"]
pub mod moderation;
#[path = "rewards/mod.rs"]
pub mod rewards;
#[path = "session/mod.rs"]
pub mod session;
#[path = "tryouts/mod.rs"]
pub mod tryouts;
#[path = "users/mod.rs"]
pub mod users;

pub use drills::{
    admin_create_drill, admin_delete_drill, admin_get_drill_submissions, admin_get_drills,
    admin_review_drill_submission, admin_update_drill,
};
pub use moderation::{admin_delete_comment, admin_delete_post, admin_get_stats};
pub use rewards::{
    admin_create_reward, admin_get_redemptions, admin_get_rewards, admin_resolve_redemption,
    admin_update_reward,
};
pub use session::{admin_get_session, admin_login, admin_logout};
pub use tryouts::{
    admin_create_tryout, admin_delete_tryout, admin_get_tryout_applications, admin_get_tryouts,
    admin_update_application, admin_update_tryout,
};
pub use users::{admin_adjust_points, admin_get_users, admin_set_user_ban};
