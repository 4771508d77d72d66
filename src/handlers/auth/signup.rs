use axum::{Json, extract::State};
use axum_extra::extract::cookie::CookieJar;
use bcrypt::{DEFAULT_COST, hash};
use uuid::Uuid;

use crate::{
    AppState,
    auth::{SessionKind, create_token, session_cookie},
    error::AppError,
    models::*,
    validation::{optional_text, required_text, validate_email, validate_password, validate_username},
};

pub async fn signup(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<RegisterRequest>,
) -> Result<(CookieJar, Json<AuthResponse>), AppError> {
    let username = validate_username(&req.username)?;
    let email = validate_email(&req.email)?;
    validate_password(&req.password)?;
    let full_name = required_text("fullName", &req.full_name, 100)?;
    let sport = optional_text("sport", req.sport, 50)?;

    let existing_user = sqlx::query("SELECT id FROM users WHERE email = $1 OR LOWER(username) = LOWER($2)")
        .bind(&email)
        .bind(&username)
        .fetch_optional(&state.pool)
        .await?;

    if existing_user.is_some() {
        return Err(AppError::UserExists);
    }

    let password_hash = hash(req.password.as_bytes(), DEFAULT_COST)
        .map_err(|e| AppError::InternalError(e.into()))?;

    let user: User = sqlx::query_as(
        r#"
        INSERT INTO users (id, username, email, password_hash, full_name, sport, rank)
        VALUES ($1, $2, $3, $4, $5, $6, (SELECT COUNT(*) + 1 FROM users WHERE is_banned = false))
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&username)
    .bind(&email)
    .bind(password_hash)
    .bind(full_name)
    .bind(sport)
    .fetch_one(&state.pool)
    .await?;

    tracing::info!(user_id = %user.id, %username, "user signed up");

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
