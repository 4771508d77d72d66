use axum::{Json, extract::State};
use bcrypt::{DEFAULT_COST, hash, verify};

use crate::{
    AppState,
    auth::AuthUser,
    error::AppError,
    models::*,
    validation::validate_password,
};

pub async fn update_user_password(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(req): Json<UpdatePasswordRequest>,
) -> Result<Json<SuccessResponse>, AppError> {
    validate_password(&req.new_password)?;

    let current_hash: String = sqlx::query_scalar("SELECT password_hash FROM users WHERE id = $1")
        .bind(auth.user_id)
        .fetch_optional(&state.pool)
        .await?
        .ok_or(AppError::NotFound)?;

    // Verify current password
    if !verify(req.current_password.as_bytes(), &current_hash)
        .map_err(|e| AppError::InternalError(e.into()))?
    {
        return Err(AppError::AuthError);
    }

    let new_password_hash = hash(req.new_password.as_bytes(), DEFAULT_COST)
        .map_err(|e| AppError::InternalError(e.into()))?;

    sqlx::query("UPDATE users SET password_hash = $1, updated_at = NOW() WHERE id = $2")
        .bind(new_password_hash)
        .bind(auth.user_id)
        .execute(&state.pool)
        .await?;

    tracing::info!(user_id = %auth.user_id, "password changed");

    Ok(Json(SuccessResponse { success: true }))
}
