use axum::{Json, extract::State};

use crate::{AppState, auth::AuthUser, error::AppError, models::*};

pub async fn get_my_redemptions(
    auth: AuthUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<RedemptionDetail>>, AppError> {
    let redemptions: Vec<RedemptionDetail> = sqlx::query_as(
        r#"
        SELECT
            r.id, r.user_id, u.username, r.reward_id, rw.title AS reward_title,
            r.cost, r.status, r.note, r.created_at, r.resolved_at
        FROM redemptions r
        JOIN users u ON u.id = r.user_id
        JOIN rewards rw ON rw.id = r.reward_id
        WHERE r.user_id = $1
        ORDER BY r.created_at DESC
        "#,
    )
    .bind(auth.user_id)
    .fetch_all(&state.pool)
    .await?;

    Ok(Json(redemptions))
}
