use axum::{Json, extract::State};

use crate::{AppState, auth::AuthUser, error::AppError, models::*};

pub async fn get_my_drill_submissions(
    auth: AuthUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<DrillSubmissionDetail>>, AppError> {
    let submissions: Vec<DrillSubmissionDetail> = sqlx::query_as(
        r#"
        SELECT
            ds.id, ds.user_id, u.username, ds.drill_id, d.title AS drill_title,
            ds.video_url, ds.notes, ds.status, ds.feedback, ds.points_awarded,
            ds.submitted_at, ds.reviewed_at
        FROM drill_submissions ds
        JOIN users u ON u.id = ds.user_id
        JOIN drills d ON d.id = ds.drill_id
        WHERE ds.user_id = $1
        ORDER BY ds.submitted_at DESC
        "#,
    )
    .bind(auth.user_id)
    .fetch_all(&state.pool)
    .await?;

    Ok(Json(submissions))
}
