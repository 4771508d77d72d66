use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    AppState,
    auth::AdminUser,
    error::AppError,
    models::*,
    validation::required_text,
};

use super::check_deadline;

pub async fn admin_update_tryout(
    _auth: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(req): Json<AdminUpdateTryoutRequest>,
) -> Result<Json<AdminItemResponse<Tryout>>, AppError> {
    let mut tx = state.pool.begin().await?;

    let existing: Tryout = sqlx::query_as("SELECT * FROM tryouts WHERE id = $1 FOR UPDATE")
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(AppError::NotFound)?;

    let title = match req.title {
        Some(t) => required_text("title", &t, 200)?,
        None => existing.title,
    };
    let sport = match req.sport {
        Some(s) => required_text("sport", &s, 50)?,
        None => existing.sport,
    };
    let location = match req.location {
        Some(l) => required_text("location", &l, 200)?,
        None => existing.location,
    };
    let description = match req.description {
        Some(d) => required_text("description", &d, 5000)?,
        None => existing.description,
    };
    let event_date = req.event_date.unwrap_or(existing.event_date);
    let application_deadline = if req.clear_application_deadline == Some(true) {
        None
    } else {
        req.application_deadline.or(existing.application_deadline)
    };
    let visible = req.visible.unwrap_or(existing.visible);

    check_deadline(event_date, application_deadline)?;

    let tryout: Tryout = sqlx::query_as(
        r#"
        UPDATE tryouts
        SET title = $1, sport = $2, location = $3, description = $4,
            event_date = $5, application_deadline = $6, visible = $7, updated_at = NOW()
        WHERE id = $8
        RETURNING *
        "#,
    )
    .bind(title)
    .bind(sport)
    .bind(location)
    .bind(description)
    .bind(event_date)
    .bind(application_deadline)
    .bind(visible)
    .bind(id)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok(Json(AdminItemResponse { item: tryout }))
}
