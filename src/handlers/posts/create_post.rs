use axum::{Json, extract::State, http::StatusCode};

use crate::{
    AppState,
    auth::AuthUser,
    error::AppError,
    models::*,
    validation::{optional_text, required_text},
};

use super::{MAX_POST_LEN, POST_SELECT};

pub async fn create_post(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(req): Json<CreatePostRequest>,
) -> Result<(StatusCode, Json<PostResponse>), AppError> {
    let content = required_text("content", &req.content, MAX_POST_LEN)?;
    let image_url = optional_text("imageUrl", req.image_url, 500)?;

    let post_id: i32 = sqlx::query_scalar(
        "INSERT INTO posts (user_id, content, image_url) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(auth.user_id)
    .bind(content)
    .bind(image_url)
    .fetch_one(&state.pool)
    .await?;

    let row: FeedPostRow = sqlx::query_as(&format!("{POST_SELECT} WHERE p.id = $2"))
        .bind(auth.user_id)
        .bind(post_id)
        .fetch_one(&state.pool)
        .await?;

    Ok((StatusCode::CREATED, Json(row.into())))
}
