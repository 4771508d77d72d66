use axum::{Json, extract::State};

use crate::{AppState, auth::AuthUser, error::AppError, models::*};

pub async fn get_rewards(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<Reward>>, AppError> {
    let rewards: Vec<Reward> =
        sqlx::query_as("SELECT * FROM rewards WHERE visible = true ORDER BY cost, id")
            .fetch_all(&state.pool)
            .await?;

    Ok(Json(rewards))
}
