use axum::{Json, extract::State};

use crate::{
    AppState,
    auth::AdminUser,
    error::AppError,
    models::*,
};

pub async fn admin_get_tryouts(
    _auth: AdminUser,
    State(state): State<AppState>,
) -> Result<Json<AdminItemsResponse<Tryout>>, AppError> {
    let tryouts: Vec<Tryout> = sqlx::query_as("SELECT * FROM tryouts ORDER BY event_date DESC")
        .fetch_all(&state.pool)
        .await?;

    Ok(Json(AdminItemsResponse { items: tryouts }))
}
