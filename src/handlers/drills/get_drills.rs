use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use crate::{AppState, auth::AuthUser, error::AppError, models::*};

#[derive(Deserialize)]
pub struct DrillQuery {
    sport: Option<String>,
}

/// Visible drills with the caller's submission state. Drills the caller has
/// never submitted report `not_submitted`.
pub async fn get_drills(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(query): Query<DrillQuery>,
) -> Result<Json<Vec<DrillWithStatus>>, AppError> {
    let sport = query.sport.filter(|s| !s.trim().is_empty());

    let drills: Vec<DrillWithStatus> = sqlx::query_as(
        r#"
        SELECT
            d.id, d.title, d.description, d.sport, d.difficulty, d.demo_video_url, d.points,
            COALESCE(ds.status, 'not_submitted') AS status,
            ds.id AS submission_id,
            ds.feedback
        FROM drills d
        LEFT JOIN drill_submissions ds ON ds.drill_id = d.id AND ds.user_id = $1
        WHERE d.visible = true
          AND ($2::text IS NULL OR LOWER(d.sport) = LOWER($2))
        ORDER BY d.sport, d.id
        "#,
    )
    .bind(auth.user_id)
    .bind(sport)
    .fetch_all(&state.pool)
    .await?;

    Ok(Json(drills))
}
