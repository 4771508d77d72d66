use axum::{Json, extract::State};

use crate::{AppState, auth::AuthUser, error::AppError, models::*};

pub async fn get_points(
    auth: AuthUser,
    State(state): State<AppState>,
) -> Result<Json<PointsResponse>, AppError> {
    let (balance, rank): (i32, i32) =
        sqlx::query_as("SELECT points, rank FROM users WHERE id = $1")
            .bind(auth.user_id)
            .fetch_optional(&state.pool)
            .await?
            .ok_or(AppError::NotFound)?;

    let transactions: Vec<PointTransaction> = sqlx::query_as(
        "SELECT * FROM point_transactions WHERE user_id = $1 ORDER BY created_at DESC, id DESC LIMIT 50",
    )
    .bind(auth.user_id)
    .fetch_all(&state.pool)
    .await?;

    Ok(Json(PointsResponse {
        balance,
        rank,
        transactions,
    }))
}
