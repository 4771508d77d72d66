use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    AppState,
    auth::AuthUser,
    error::AppError,
    models::*,
    validation::required_text,
};

use super::{COMMENT_SELECT, MAX_COMMENT_LEN, like_post::ensure_post_exists};

pub async fn create_comment(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(req): Json<CreateCommentRequest>,
) -> Result<(StatusCode, Json<CommentResponse>), AppError> {
    let content = required_text("content", &req.content, MAX_COMMENT_LEN)?;
    ensure_post_exists(&state.pool, id).await?;

    let comment_id: i32 = sqlx::query_scalar(
        "INSERT INTO post_comments (post_id, user_id, content) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(id)
    .bind(auth.user_id)
    .bind(content)
    .fetch_one(&state.pool)
    .await?;

    let row: CommentRow = sqlx::query_as(&format!("{COMMENT_SELECT} WHERE c.id = $1"))
        .bind(comment_id)
        .fetch_one(&state.pool)
        .await?;

    Ok((StatusCode::CREATED, Json(row.into())))
}
