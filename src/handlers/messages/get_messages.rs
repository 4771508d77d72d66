use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::{AppState, auth::AuthUser, error::AppError, models::*};

use super::load_participant_conversation;

const HISTORY_LIMIT: i64 = 100;

#[derive(Deserialize)]
pub struct MessagesQuery {
    /// Only return messages with an id greater than this (for polling).
    after: Option<i32>,
}

/// Returns the conversation history and marks it seen for the caller.
pub async fn get_messages(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(query): Query<MessagesQuery>,
) -> Result<Json<Vec<MessageResponse>>, AppError> {
    let conversation = load_participant_conversation(&state.pool, id, auth.user_id).await?;
    let side = conversation
        .side_of(auth.user_id)
        .ok_or(AppError::NotFound)?;

    let messages: Vec<Message> = match query.after {
        Some(after) => {
            sqlx::query_as(
                "SELECT * FROM messages WHERE conversation_id = $1 AND id > $2 \
                 ORDER BY created_at, id",
            )
            .bind(id)
            .bind(after)
            .fetch_all(&state.pool)
            .await?
        }
        None => {
            sqlx::query_as(
                r#"
                SELECT * FROM (
                    SELECT * FROM messages WHERE conversation_id = $1
                    ORDER BY created_at DESC, id DESC
                    LIMIT $2
                ) recent
                ORDER BY created_at, id
                "#,
            )
            .bind(id)
            .bind(HISTORY_LIMIT)
            .fetch_all(&state.pool)
            .await?
        }
    };

    // Seen up to the newest message actually returned. A message still being
    // committed by the partner stays unread.
    if let Some(newest) = messages.iter().map(|m| m.created_at).max() {
        sqlx::query(&format!(
            "UPDATE conversations SET {col} = GREATEST({col}, $1) WHERE id = $2",
            col = side.last_seen_column()
        ))
        .bind(newest)
        .bind(id)
        .execute(&state.pool)
        .await?;
    }

    Ok(Json(
        messages
            .into_iter()
            .map(|m| MessageResponse::for_viewer(m, auth.user_id))
            .collect(),
    ))
}
