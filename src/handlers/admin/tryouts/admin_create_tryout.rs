use axum::{Json, extract::State, http::StatusCode};

use crate::{
    AppState,
    auth::AdminUser,
    error::AppError,
    models::*,
    validation::required_text,
};

use super::check_deadline;

pub async fn admin_create_tryout(
    auth: AdminUser,
    State(state): State<AppState>,
    Json(req): Json<AdminCreateTryoutRequest>,
) -> Result<(StatusCode, Json<AdminItemResponse<Tryout>>), AppError> {
    let title = required_text("title", &req.title, 200)?;
    let sport = required_text("sport", &req.sport, 50)?;
    let location = required_text("location", &req.location, 200)?;
    let description = required_text("description", &req.description, 5000)?;
    check_deadline(req.event_date, req.application_deadline)?;

    let tryout: Tryout = sqlx::query_as(
        r#"
        INSERT INTO tryouts (title, sport, location, description, event_date, application_deadline, visible)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        "#,
    )
    .bind(title)
    .bind(sport)
    .bind(location)
    .bind(description)
    .bind(req.event_date)
    .bind(req.application_deadline)
    .bind(req.visible.unwrap_or(true))
    .fetch_one(&state.pool)
    .await?;

    tracing::info!(admin = %auth.username, tryout_id = tryout.id, "tryout created");

    Ok((StatusCode::CREATED, Json(AdminItemResponse { item: tryout })))
}
