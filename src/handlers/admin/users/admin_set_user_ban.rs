use axum::{
    Json,
    extract::{Path, State},
};
use uuid::Uuid;

use crate::{
    AppState,
    auth::AdminUser,
    error::AppError,
    models::*,
    points::update_user_ranks,
};

pub async fn admin_set_user_ban(
    auth: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<AdminBanRequest>,
) -> Result<Json<AdminItemResponse<AdminUserRow>>, AppError> {
    let result = sqlx::query("UPDATE users SET is_banned = $1, updated_at = NOW() WHERE id = $2")
        .bind(req.banned)
        .bind(id)
        .execute(&state.pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound);
    }

    update_user_ranks(&state.pool).await?;

    let user: AdminUserRow = sqlx::query_as(
        "SELECT id, username, email, full_name, points, rank, is_banned, created_at \
         FROM users WHERE id = $1",
    )
    .bind(id)
    .fetch_one(&state.pool)
    .await?;

    tracing::info!(
        admin = %auth.username,
        user_id = %id,
        banned = req.banned,
        "user ban status changed"
    );

    Ok(Json(AdminItemResponse { item: user }))
}
