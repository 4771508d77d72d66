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

use super::REDEMPTION_DETAIL_SELECT;

#[derive(Deserialize)]
pub struct AdminRedemptionQuery {
    status: Option<RedemptionStatus>,
}

pub async fn admin_get_redemptions(
    _auth: AdminUser,
    State(state): State<AppState>,
    Query(query): Query<AdminRedemptionQuery>,
) -> Result<Json<AdminItemsResponse<RedemptionDetail>>, AppError> {
    let redemptions: Vec<RedemptionDetail> = sqlx::query_as(&format!(
        "{REDEMPTION_DETAIL_SELECT} WHERE ($1::text IS NULL OR rd.status = $1) \
         ORDER BY rd.created_at"
    ))
    .bind(query.status.map(|s| s.as_str()))
    .fetch_all(&state.pool)
    .await?;

    Ok(Json(AdminItemsResponse { items: redemptions }))
}
