use axum::{Json, extract::State};
use axum_extra::extract::cookie::CookieJar;
use bcrypt::verify;

use crate::{
    AppState,
    auth::{SessionKind, create_token, session_cookie},
    error::AppError,
    models::*,
};

pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<LoginRequest>,
) -> Result<(CookieJar, Json<AuthResponse>), AppError> {
    let identifier = req.identifier.trim();
    if identifier.is_empty() || req.password.is_empty() {
        return Err(AppError::AuthError);
    }

    let user: User = sqlx::query_as(
        "SELECT * FROM users WHERE email = LOWER($1) OR LOWER(username) = LOWER($1)",
    )
    .bind(identifier)
    .fetch_optional(&state.pool)
    .await?
    .ok_or(AppError::AuthError)?;

    if !verify(req.password.as_bytes(), &user.password_hash)
        .map_err(|e| AppError::InternalError(e.into()))?
    {
        tracing::warn!(user_id = %user.id, "failed login attempt");
        return Err(AppError::AuthError);
    }

    if user.is_banned {
        return Err(AppError::Banned);
    }

    let token = create_token(&state.config, SessionKind::User, &user.id.to_string())?;
    let jar = jar.add(session_cookie(&state.config, SessionKind::User, token.clone()));

    Ok((
        jar,
        Json(AuthResponse {
            token,
            user: user.into(),
        }),
    ))
}
