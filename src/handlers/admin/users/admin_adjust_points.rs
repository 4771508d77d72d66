use axum::{
    Json,
    extract::{Path, State},
};
use uuid::Uuid;

use crate::{
    AppState,
    auth::AdminUser,
    error::AppError,
    models::*,
    points::{record_points, update_user_ranks},
    validation::required_text,
};

/// Manual ledger entry. Positive amounts grant, negative amounts deduct.
pub async fn admin_adjust_points(
    auth: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<AdminAdjustPointsRequest>,
) -> Result<Json<AdminAdjustPointsResponse>, AppError> {
    let reason = required_text("reason", &req.reason, 200)?;

    let mut tx = state.pool.begin().await?;
    let balance = record_points(&mut *tx, id, req.amount, &reason).await?;
    tx.commit().await?;

    update_user_ranks(&state.pool).await?;

    tracing::info!(admin = %auth.username, user_id = %id, amount = req.amount, "points adjusted");

    Ok(Json(AdminAdjustPointsResponse { balance }))
}
