use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    AppState,
    auth::AuthUser,
    error::AppError,
    messaging::MAX_MESSAGE_LEN,
    models::*,
    validation::required_text,
};

use super::load_participant_conversation;

pub async fn send_message(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(req): Json<SendMessageRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    let content = required_text("content", &req.content, MAX_MESSAGE_LEN)?;

    let conversation = load_participant_conversation(&state.pool, id, auth.user_id).await?;
    let side = conversation
        .side_of(auth.user_id)
        .ok_or(AppError::NotFound)?;

    let mut tx = state.pool.begin().await?;

    let message: Message = sqlx::query_as(
        "INSERT INTO messages (conversation_id, sender_id, content) VALUES ($1, $2, $3) RETURNING *",
    )
    .bind(id)
    .bind(auth.user_id)
    .bind(content)
    .fetch_one(&mut *tx)
    .await?;

    // Sending implies the sender has seen everything up to their own message.
    sqlx::query(&format!(
        "UPDATE conversations \
         SET last_message_at = GREATEST(last_message_at, $1), {col} = GREATEST({col}, $1) \
         WHERE id = $2",
        col = side.last_seen_column()
    ))
    .bind(message.created_at)
    .bind(id)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::for_viewer(message, auth.user_id)),
    ))
}
