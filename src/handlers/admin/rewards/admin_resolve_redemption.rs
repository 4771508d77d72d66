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
    points::{record_points, refund_reason, update_user_ranks},
    validation::optional_text,
};

use super::REDEMPTION_DETAIL_SELECT;

/// Fulfils or rejects a pending redemption. Rejection refunds the cost and
/// puts the item back into stock when stock is tracked.
pub async fn admin_resolve_redemption(
    auth: AdminUser,
    State(state): State<AppState>,
    Path(redemption_id): Path<Uuid>,
    Json(req): Json<AdminResolveRedemptionRequest>,
) -> Result<Json<AdminItemResponse<RedemptionDetail>>, AppError> {
    let note = optional_text("note", req.note, 1000)?;

    let mut tx = state.pool.begin().await?;

    let redemption: Redemption =
        sqlx::query_as("SELECT * FROM redemptions WHERE id = $1 FOR UPDATE")
            .bind(redemption_id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or(AppError::NotFound)?;

    let current = RedemptionStatus::parse(&redemption.status).ok_or_else(|| {
        AppError::InternalError(anyhow::anyhow!(
            "unknown redemption status {:?}",
            redemption.status
        ))
    })?;

    if !current.can_transition_to(req.decision) {
        return Err(AppError::BadRequest(
            "Only pending redemptions can be resolved".to_string(),
        ));
    }

    sqlx::query(
        r#"
        UPDATE redemptions
        SET status = $1, note = $2, resolved_at = NOW(), updated_at = NOW()
        WHERE id = $3
        "#,
    )
    .bind(req.decision.as_str())
    .bind(note)
    .bind(redemption_id)
    .execute(&mut *tx)
    .await?;

    let refunded = req.decision.refunds();
    if refunded {
        let reward_title: String =
            sqlx::query_scalar("SELECT title FROM rewards WHERE id = $1 FOR UPDATE")
                .bind(redemption.reward_id)
                .fetch_one(&mut *tx)
                .await?;

        sqlx::query(
            "UPDATE rewards SET stock = stock + 1, updated_at = NOW() \
             WHERE id = $1 AND stock IS NOT NULL",
        )
        .bind(redemption.reward_id)
        .execute(&mut *tx)
        .await?;

        record_points(
            &mut *tx,
            redemption.user_id,
            redemption.cost,
            &refund_reason(&reward_title),
        )
        .await?;
    }

    tx.commit().await?;

    if refunded {
        update_user_ranks(&state.pool).await?;
    }

    tracing::info!(
        admin = %auth.username,
        %redemption_id,
        decision = req.decision.as_str(),
        "redemption resolved"
    );

    let item: RedemptionDetail =
        sqlx::query_as(&format!("{REDEMPTION_DETAIL_SELECT} WHERE rd.id = $1"))
            .bind(redemption_id)
            .fetch_one(&state.pool)
            .await?;

    Ok(Json(AdminItemResponse { item }))
}
