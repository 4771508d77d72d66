use axum::{Json, extract::State};

use crate::{
    AppState,
    auth::AdminUser,
    error::AppError,
    models::*,
};

pub async fn admin_get_stats(
    _auth: AdminUser,
    State(state): State<AppState>,
) -> Result<Json<AdminStatsResponse>, AppError> {
    let stats: AdminStatsResponse = sqlx::query_as(
        r#"
        SELECT
            (SELECT COUNT(*) FROM users) AS users,
            (SELECT COUNT(*) FROM users WHERE is_banned) AS banned_users,
            (SELECT COUNT(*) FROM posts) AS posts,
            (SELECT COUNT(*) FROM messages) AS messages,
            (SELECT COUNT(*) FROM drill_submissions WHERE status = 'under_review')
                AS drill_submissions_under_review,
            (SELECT COUNT(*) FROM redemptions WHERE status = 'pending') AS pending_redemptions,
            (SELECT COUNT(*) FROM tryout_applications WHERE status = 'pending')
                AS pending_applications
        "#,
    )
    .fetch_one(&state.pool)
    .await?;

    Ok(Json(stats))
}
