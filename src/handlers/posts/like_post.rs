use axum::{
    Json,
    extract::{Path, State},
};

use crate::{AppState, auth::AuthUser, error::AppError, models::*};

pub async fn like_post(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<LikeResponse>, AppError> {
    ensure_post_exists(&state.pool, id).await?;

    sqlx::query("INSERT INTO post_likes (post_id, user_id) VALUES ($1, $2) ON CONFLICT DO NOTHING")
        .bind(id)
        .bind(auth.user_id)
        .execute(&state.pool)
        .await?;

    Ok(Json(LikeResponse {
        liked: true,
        like_count: like_count(&state.pool, id).await?,
    }))
}

pub async fn unlike_post(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<LikeResponse>, AppError> {
    ensure_post_exists(&state.pool, id).await?;

    sqlx::query("DELETE FROM post_likes WHERE post_id = $1 AND user_id = $2")
        .bind(id)
        .bind(auth.user_id)
        .execute(&state.pool)
        .await?;

    Ok(Json(LikeResponse {
        liked: false,
        like_count: like_count(&state.pool, id).await?,
    }))
}

pub(crate) async fn ensure_post_exists(pool: &sqlx::PgPool, id: i32) -> Result<(), AppError> {
    let found: Option<i32> = sqlx::query_scalar(
        "SELECT p.id FROM posts p JOIN users u ON u.id = p.user_id \
         WHERE p.id = $1 AND u.is_banned = false",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    found.map(|_| ()).ok_or(AppError::NotFound)
}

async fn like_count(pool: &sqlx::PgPool, id: i32) -> Result<i64, AppError> {
    let count = sqlx::query_scalar("SELECT COUNT(*) FROM post_likes WHERE post_id = $1")
        .bind(id)
        .fetch_one(pool)
        .await?;
    Ok(count)
}
