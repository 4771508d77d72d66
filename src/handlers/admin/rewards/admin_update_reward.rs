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

use super::check_cost_and_stock;

/// Locks the row so a redemption committing meanwhile keeps its stock decrement.
pub async fn admin_update_reward(
    _auth: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(req): Json<AdminUpdateRewardRequest>,
) -> Result<Json<AdminItemResponse<Reward>>, AppError> {
    let mut tx = state.pool.begin().await?;

    let existing: Reward = sqlx::query_as("SELECT * FROM rewards WHERE id = $1 FOR UPDATE")
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(AppError::NotFound)?;

    let title = match req.title {
        Some(t) => required_text("title", &t, 200)?,
        None => existing.title,
    };
    let description = match req.description {
        Some(d) => required_text("description", &d, 2000)?,
        None => existing.description,
    };
    let image_url = match req.image_url {
        Some(url) => optional_text("imageUrl", Some(url), 500)?,
        None => existing.image_url,
    };
    let cost = req.cost.unwrap_or(existing.cost);
    let stock = if req.unlimited_stock == Some(true) {
        None
    } else {
        req.stock.or(existing.stock)
    };
    let visible = req.visible.unwrap_or(existing.visible);

    check_cost_and_stock(cost, stock)?;

    let reward: Reward = sqlx::query_as(
        r#"
        UPDATE rewards
        SET title = $1, description = $2, cost = $3, stock = $4,
            image_url = $5, visible = $6, updated_at = NOW()
        WHERE id = $7
        RETURNING *
        "#,
    )
    .bind(title)
    .bind(description)
    .bind(cost)
    .bind(stock)
    .bind(image_url)
    .bind(visible)
    .bind(id)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok(Json(AdminItemResponse { item: reward }))
}
