use axum::{Json, extract::State};

use crate::{
    AppState,
    auth::AdminUser,
    error::AppError,
    models::*,
};

/// All drills, hidden ones included.
pub async fn admin_get_drills(
    _auth: AdminUser,
    State(state): State<AppState>,
) -> Result<Json<AdminItemsResponse<Drill>>, AppError> {
    let drills: Vec<Drill> = sqlx::query_as("SELECT * FROM drills ORDER BY id")
        .fetch_all(&state.pool)
        .await?;

    Ok(Json(AdminItemsResponse { items: drills }))
}
