use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use crate::{
    AppState,
    auth::AdminUser,
    error::AppError,
    models::*,
};

use super::SUBMISSION_DETAIL_SELECT;

#[derive(Deserialize)]
pub struct AdminSubmissionQuery {
    status: Option<DrillStatus>,
}

/// Review queue. Oldest first, so submissions are reviewed in arrival order.
pub async fn admin_get_drill_submissions(
    _auth: AdminUser,
    State(state): State<AppState>,
    Query(query): Query<AdminSubmissionQuery>,
) -> Result<Json<AdminItemsResponse<DrillSubmissionDetail>>, AppError> {
    let submissions: Vec<DrillSubmissionDetail> = sqlx::query_as(&format!(
        "{SUBMISSION_DETAIL_SELECT} WHERE ($1::text IS NULL OR ds.status = $1) \
         ORDER BY ds.submitted_at"
    ))
    .bind(query.status.map(|s| s.as_str()))
    .fetch_all(&state.pool)
    .await?;

    Ok(Json(AdminItemsResponse { items: submissions }))
}
