pub mod get_my_redemptions;
pub mod get_points;
pub mod get_rewards;
pub mod redeem_reward;
