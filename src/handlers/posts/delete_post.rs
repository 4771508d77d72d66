use axum::{
    Json,
    extract::{Path, State},
};
use uuid::Uuid;

use crate::{AppState, auth::AuthUser, error::AppError, models::*};

pub async fn delete_post(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<SuccessResponse>, AppError> {
    let author: Uuid = sqlx::query_scalar("SELECT user_id FROM posts WHERE id = $1")
        .bind(id)
        .fetch_optional(&state.pool)
        .await?
        .ok_or(AppError::NotFound)?;

    if author != auth.user_id {
        return Err(AppError::Forbidden);
    }

    sqlx::query("DELETE FROM posts WHERE id = $1")
        .bind(id)
        .execute(&state.pool)
        .await?;

    Ok(Json(SuccessResponse { success: true }))
}
