use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    AppState,
    auth::AuthUser,
    error::AppError,
    models::*,
    validation::{optional_text, required_text},
};

pub async fn apply_to_tryout(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(tryout_id): Path<i32>,
    Json(req): Json<ApplyTryoutRequest>,
) -> Result<(StatusCode, Json<TryoutApplication>), AppError> {
    let position = required_text("position", &req.position, 100)?;
    let experience = optional_text("experience", req.experience, 2000)?;
    let message = optional_text("message", req.message, 2000)?;

    let tryout: Tryout = sqlx::query_as("SELECT * FROM tryouts WHERE id = $1 AND visible = true")
        .bind(tryout_id)
        .fetch_optional(&state.pool)
        .await?
        .ok_or(AppError::NotFound)?;

    if !tryout.accepting_applications(time::OffsetDateTime::now_utc()) {
        return Err(AppError::BadRequest(
            "The application deadline for this tryout has passed".to_string(),
        ));
    }

    let application: TryoutApplication = sqlx::query_as(
        r#"
        INSERT INTO tryout_applications (tryout_id, user_id, position, experience, message)
        VALUES ($1, $2, $3, $4, $5)
        ON CONFLICT (tryout_id, user_id) DO NOTHING
        RETURNING *
        "#,
    )
    .bind(tryout_id)
    .bind(auth.user_id)
    .bind(position)
    .bind(experience)
    .bind(message)
    .fetch_optional(&state.pool)
    .await?
    .ok_or_else(|| AppError::Conflict("You have already applied to this tryout".to_string()))?;

    tracing::info!(user_id = %auth.user_id, tryout_id, "tryout application received");

    Ok((StatusCode::CREATED, Json(application)))
}
