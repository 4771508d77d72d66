use axum::{
    Json,
    extract::{Path, State},
};
use uuid::Uuid;

use crate::{AppState, auth::AuthUser, error::AppError, models::*};

pub async fn follow_user(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<FollowResponse>, AppError> {
    if id == auth.user_id {
        return Err(AppError::BadRequest("You cannot follow yourself".to_string()));
    }

    let exists: Option<bool> = sqlx::query_scalar("SELECT is_banned FROM users WHERE id = $1")
        .bind(id)
        .fetch_optional(&state.pool)
        .await?;
    if exists != Some(false) {
        return Err(AppError::NotFound);
    }

    sqlx::query(
        "INSERT INTO follows (follower_id, followee_id) VALUES ($1, $2) ON CONFLICT DO NOTHING",
    )
    .bind(auth.user_id)
    .bind(id)
    .execute(&state.pool)
    .await?;

    let followers = follower_count(&state.pool, id).await?;

    Ok(Json(FollowResponse {
        following: true,
        followers,
    }))
}

pub async fn unfollow_user(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<FollowResponse>, AppError> {
    sqlx::query("DELETE FROM follows WHERE follower_id = $1 AND followee_id = $2")
        .bind(auth.user_id)
        .bind(id)
        .execute(&state.pool)
        .await?;

    let followers = follower_count(&state.pool, id).await?;

    Ok(Json(FollowResponse {
        following: false,
        followers,
    }))
}

async fn follower_count(pool: &sqlx::PgPool, user_id: Uuid) -> Result<i64, AppError> {
    let count = sqlx::query_scalar("SELECT COUNT(*) FROM follows WHERE followee_id = $1")
        .bind(user_id)
        .fetch_one(pool)
        .await?;
    Ok(count)
}
