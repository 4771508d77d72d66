use axum::{Json, extract::State, http::StatusCode};

use crate::{
    AppState,
    auth::AdminUser,
    error::AppError,
    models::*,
    validation::{optional_text, required_text},
};

use super::check_cost_and_stock;

pub async fn admin_create_reward(
    auth: AdminUser,
    State(state): State<AppState>,
    Json(req): Json<AdminCreateRewardRequest>,
) -> Result<(StatusCode, Json<AdminItemResponse<Reward>>), AppError> {
    let title = required_text("title", &req.title, 200)?;
    let description = required_text("description", &req.description, 2000)?;
    let image_url = optional_text("imageUrl", req.image_url, 500)?;
    check_cost_and_stock(req.cost, req.stock)?;

    let reward: Reward = sqlx::query_as(
        r#"
        INSERT INTO rewards (title, description, cost, stock, image_url, visible)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        "#,
    )
    .bind(title)
    .bind(description)
    .bind(req.cost)
    .bind(req.stock)
    .bind(image_url)
    .bind(req.visible.unwrap_or(true))
    .fetch_one(&state.pool)
    .await?;

    tracing::info!(admin = %auth.username, reward_id = reward.id, "reward created");

    Ok((StatusCode::CREATED, Json(AdminItemResponse { item: reward })))
}
