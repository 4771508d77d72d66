use axum::{Json, extract::State};

use crate::{AppState, error::AppError, models::*};

pub async fn get_leaderboards(
    State(state): State<AppState>,
) -> Result<Json<Vec<LeaderboardEntry>>, AppError> {
    // Top 10 by points, banned accounts excluded
    let entries: Vec<LeaderboardEntry> = sqlx::query_as(
        r#"
        SELECT id, username, full_name, image, points, rank
        FROM users
        WHERE is_banned = false
        ORDER BY points DESC, created_at ASC
        LIMIT 10
        "#,
    )
    .fetch_all(&state.pool)
    .await?;

    Ok(Json(entries))
}
