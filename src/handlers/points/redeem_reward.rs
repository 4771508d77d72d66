use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    AppState,
    auth::AuthUser,
    error::AppError,
    models::*,
    points::{record_points, redemption_reason, update_user_ranks},
};

/// Spends points on a reward. Stock, balance and the pending redemption are
/// all written in one transaction.
pub async fn redeem_reward(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<(StatusCode, Json<RedeemResponse>), AppError> {
    let mut tx = state.pool.begin().await?;

    let reward: Reward =
        sqlx::query_as("SELECT * FROM rewards WHERE id = $1 AND visible = true FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or(AppError::NotFound)?;

    match reward.stock {
        Some(0) => {
            return Err(AppError::BadRequest("This reward is out of stock".to_string()));
        }
        Some(_) => {
            sqlx::query("UPDATE rewards SET stock = stock - 1, updated_at = NOW() WHERE id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await?;
        }
        None => {}
    }

    let balance = record_points(
        &mut *tx,
        auth.user_id,
        -reward.cost,
        &redemption_reason(&reward.title),
    )
    .await?;

    let redemption: Redemption = sqlx::query_as(
        "INSERT INTO redemptions (user_id, reward_id, cost) VALUES ($1, $2, $3) RETURNING *",
    )
    .bind(auth.user_id)
    .bind(reward.id)
    .bind(reward.cost)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;
    update_user_ranks(&state.pool).await?;

    tracing::info!(
        user_id = %auth.user_id,
        reward_id = reward.id,
        redemption_id = %redemption.id,
        "reward redeemed"
    );

    Ok((
        StatusCode::CREATED,
        Json(RedeemResponse {
            redemption,
            balance,
        }),
    ))
}
