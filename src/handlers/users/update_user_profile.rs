use axum::{Json, extract::State};

use crate::{
    AppState,
    auth::AuthUser,
    error::AppError,
    models::*,
    validation::{optional_text, required_text},
};

pub async fn update_user_profile(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(req): Json<UpdateProfileRequest>,
) -> Result<Json<UserResponse>, AppError> {
    let existing: User = sqlx::query_as("SELECT * FROM users WHERE id = $1")
        .bind(auth.user_id)
        .fetch_optional(&state.pool)
        .await?
        .ok_or(AppError::NotFound)?;

    let full_name = match req.full_name {
        Some(name) => required_text("fullName", &name, 100)?,
        None => existing.full_name,
    };
    // An explicit empty string clears the field; absent keeps it.
    let bio = match req.bio {
        Some(bio) => optional_text("bio", Some(bio), 500)?,
        None => existing.bio,
    };
    let sport = match req.sport {
        Some(sport) => optional_text("sport", Some(sport), 50)?,
        None => existing.sport,
    };
    let location = match req.location {
        Some(location) => optional_text("location", Some(location), 100)?,
        None => existing.location,
    };

    let user: User = sqlx::query_as(
        r#"
        UPDATE users
        SET full_name = $1, bio = $2, sport = $3, location = $4, updated_at = NOW()
        WHERE id = $5
        RETURNING *
        "#,
    )
    .bind(full_name)
    .bind(bio)
    .bind(sport)
    .bind(location)
    .bind(auth.user_id)
    .fetch_one(&state.pool)
    .await?;

    Ok(Json(user.into()))
}
