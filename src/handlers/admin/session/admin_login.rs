use axum::{Json, extract::State};
use axum_extra::extract::cookie::CookieJar;

use crate::{
    AppState,
    auth::{SessionKind, create_token, session_cookie, verify_admin_credentials},
    error::AppError,
    models::*,
};

/// Signs in the single configured admin. Independent of any user session.
pub async fn admin_login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<AdminLoginRequest>,
) -> Result<(CookieJar, Json<AdminSessionResponse>), AppError> {
    if !verify_admin_credentials(&state.config, req.username.trim(), &req.password)? {
        tracing::warn!(username = %req.username, "failed admin login attempt");
        return Err(AppError::AuthError);
    }

    let username = state.config.admin_username.clone();
    let token = create_token(&state.config, SessionKind::Admin, &username)?;
    let jar = jar.add(session_cookie(&state.config, SessionKind::Admin, token));

    tracing::info!(%username, "admin signed in");

    Ok((jar, Json(AdminSessionResponse { username })))
}
