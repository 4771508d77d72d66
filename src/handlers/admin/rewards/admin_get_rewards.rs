use axum::{Json, extract::State};

use crate::{
    AppState,
    auth::AdminUser,
    error::AppError,
    models::*,
};

pub async fn admin_get_rewards(
    _auth: AdminUser,
    State(state): State<AppState>,
) -> Result<Json<AdminItemsResponse<Reward>>, AppError> {
    let rewards: Vec<Reward> = sqlx::query_as("SELECT * FROM rewards ORDER BY cost, id")
        .fetch_all(&state.pool)
        .await?;

    Ok(Json(AdminItemsResponse { items: rewards }))
}
