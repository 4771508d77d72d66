use axum::{
    Json,
    extract::{Path, State},
};

use crate::{AppState, auth::AuthUser, error::AppError, models::*};

use super::{COMMENT_SELECT, like_post::ensure_post_exists};

pub async fn get_post_comments(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<CommentResponse>>, AppError> {
    ensure_post_exists(&state.pool, id).await?;

    let rows: Vec<CommentRow> = sqlx::query_as(&format!(
        "{COMMENT_SELECT} WHERE c.post_id = $1 AND u.is_banned = false ORDER BY c.created_at, c.id"
    ))
    .bind(id)
    .fetch_all(&state.pool)
    .await?;

    Ok(Json(rows.into_iter().map(CommentResponse::from).collect()))
}
