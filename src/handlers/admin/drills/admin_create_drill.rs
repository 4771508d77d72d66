use axum::{Json, extract::State, http::StatusCode};

use crate::{
    AppState,
    auth::AdminUser,
    error::AppError,
    models::*,
    validation::{optional_text, required_text},
};

use super::check_difficulty;

pub async fn admin_create_drill(
    _auth: AdminUser,
    State(state): State<AppState>,
    Json(req): Json<AdminCreateDrillRequest>,
) -> Result<(StatusCode, Json<AdminItemResponse<Drill>>), AppError> {
    let title = required_text("title", &req.title, 200)?;
    let description = required_text("description", &req.description, 5000)?;
    let sport = required_text("sport", &req.sport, 50)?;
    let difficulty = req.difficulty.unwrap_or_else(|| "beginner".to_string());
    check_difficulty(&difficulty)?;
    let demo_video_url = optional_text("demoVideoUrl", req.demo_video_url, 500)?;

    if req.points < 0 {
        return Err(AppError::BadRequest("points must not be negative".to_string()));
    }

    let drill: Drill = sqlx::query_as(
        r#"
        INSERT INTO drills (title, description, sport, difficulty, demo_video_url, points, visible)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        "#,
    )
    .bind(title)
    .bind(description)
    .bind(sport)
    .bind(difficulty)
    .bind(demo_video_url)
    .bind(req.points)
    .bind(req.visible.unwrap_or(true))
    .fetch_one(&state.pool)
    .await?;

    Ok((StatusCode::CREATED, Json(AdminItemResponse { item: drill })))
}
