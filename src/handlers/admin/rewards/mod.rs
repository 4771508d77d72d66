pub mod admin_create_reward;
pub mod admin_get_redemptions;
pub mod admin_get_rewards;
pub mod admin_resolve_redemption;
pub mod admin_update_reward;

pub use admin_create_reward::admin_create_reward;
pub use admin_get_redemptions::admin_get_redemptions;
pub use admin_get_rewards::admin_get_rewards;
pub use admin_resolve_redemption::admin_resolve_redemption;
pub use admin_update_reward::admin_update_reward;

use crate::error::AppError;

pub(crate) const REDEMPTION_DETAIL_SELECT: &str = r#"
    SELECT
        rd.id, rd.user_id, u.username, rd.reward_id, rw.title AS reward_title,
        rd.cost, rd.status, rd.note, rd.created_at, rd.resolved_at
    FROM redemptions rd
    JOIN users u ON u.id = rd.user_id
    JOIN rewards rw ON rw.id = rd.reward_id
"#;

pub(crate) fn check_cost_and_stock(cost: i32, stock: Option<i32>) -> Result<(), AppError> {
    if cost <= 0 {
        return Err(AppError::BadRequest("cost must be positive".to_string()));
    }
    if stock.is_some_and(|s| s < 0) {
        return Err(AppError::BadRequest("stock must not be negative".to_string()));
    }
    Ok(())
}
