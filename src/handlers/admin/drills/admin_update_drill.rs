use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    AppState,
    auth::AdminUser,
    error::AppError,
    models::*,
    validation::{optional_text, required_text},
};

use super::check_difficulty;

pub async fn admin_update_drill(
    _auth: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(req): Json<AdminUpdateDrillRequest>,
) -> Result<Json<AdminItemResponse<Drill>>, AppError> {
    let mut tx = state.pool.begin().await?;

    let existing: Drill = sqlx::query_as("SELECT * FROM drills WHERE id = $1 FOR UPDATE")
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(AppError::NotFound)?;

    let title = match req.title {
        Some(t) => required_text("title", &t, 200)?,
        None => existing.title,
    };
    let description = match req.description {
        Some(d) => required_text("description", &d, 5000)?,
        None => existing.description,
    };
    let sport = match req.sport {
        Some(s) => required_text("sport", &s, 50)?,
        None => existing.sport,
    };
    let difficulty = req.difficulty.unwrap_or(existing.difficulty);
    check_difficulty(&difficulty)?;
    let demo_video_url = match req.demo_video_url {
        Some(url) => optional_text("demoVideoUrl", Some(url), 500)?,
        None => existing.demo_video_url,
    };
    let points = req.points.unwrap_or(existing.points);
    let visible = req.visible.unwrap_or(existing.visible);

    if points < 0 {
        return Err(AppError::BadRequest("points must not be negative".to_string()));
    }

    let drill: Drill = sqlx::query_as(
        r#"
        UPDATE drills
        SET title = $1, description = $2, sport = $3, difficulty = $4,
            demo_video_url = $5, points = $6, visible = $7, updated_at = NOW()
        WHERE id = $8
        RETURNING *
        "#,
    )
    .bind(title)
    .bind(description)
    .bind(sport)
    .bind(difficulty)
    .bind(demo_video_url)
    .bind(points)
    .bind(visible)
    .bind(id)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok(Json(AdminItemResponse { item: drill }))
}
