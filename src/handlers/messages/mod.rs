pub mod get_conversations;
pub mod get_messages;
pub mod get_unread_count;
pub mod send_message;
pub mod start_conversation;

use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::{
    error::AppError,
    messaging::UNREAD_COUNT_SQL,
    models::{Conversation, ConversationResponse, MessageResponse, UserSummary},
};

#[derive(FromRow)]
pub(crate) struct ConversationRow {
    id: i32,
    last_message_at: Option<OffsetDateTime>,
    partner_id: Uuid,
    partner_username: String,
    partner_full_name: String,
    partner_image: Option<String>,
    last_message_id: Option<i32>,
    last_message_sender_id: Option<Uuid>,
    last_message_content: Option<String>,
    last_message_created_at: Option<OffsetDateTime>,
    unread_count: i64,
}

impl ConversationRow {
    pub(crate) fn into_response(self, viewer: Uuid) -> ConversationResponse {
        let last_message = match (
            self.last_message_id,
            self.last_message_sender_id,
            self.last_message_content,
            self.last_message_created_at,
        ) {
            (Some(id), Some(sender_id), Some(content), Some(created_at)) => Some(MessageResponse {
                id,
                conversation_id: self.id,
                sender_id,
                content,
                created_at,
                is_mine: sender_id == viewer,
            }),
            _ => None,
        };

        ConversationResponse {
            id: self.id,
            partner: UserSummary {
                id: self.partner_id,
                username: self.partner_username,
                full_name: self.partner_full_name,
                image: self.partner_image,
            },
            last_message,
            last_message_at: self.last_message_at,
            unread_count: self.unread_count,
        }
    }
}

/// Conversation list projection for the viewer bound as `$1`.
pub(crate) fn conversation_select() -> String {
    format!(
        r#"
        SELECT
            c.id, c.last_message_at,
            u.id AS partner_id,
            u.username AS partner_username,
            u.full_name AS partner_full_name,
            u.image AS partner_image,
            lm.id AS last_message_id,
            lm.sender_id AS last_message_sender_id,
            lm.content AS last_message_content,
            lm.created_at AS last_message_created_at,
            ({UNREAD_COUNT_SQL}) AS unread_count
        FROM conversations c
        JOIN users u ON u.id = CASE WHEN c.user1_id = $1 THEN c.user2_id ELSE c.user1_id END
        LEFT JOIN LATERAL (
            SELECT id, sender_id, content, created_at FROM messages
            WHERE conversation_id = c.id
            ORDER BY created_at DESC, id DESC
            LIMIT 1
        ) lm ON true
        "#
    )
}

/// Loads a conversation the viewer participates in. Anyone else gets 404 so
/// conversation ids don't leak.
pub(crate) async fn load_participant_conversation(
    pool: &sqlx::PgPool,
    conversation_id: i32,
    viewer: Uuid,
) -> Result<Conversation, AppError> {
    let conversation: Conversation = sqlx::query_as("SELECT * FROM conversations WHERE id = $1")
        .bind(conversation_id)
        .fetch_optional(pool)
        .await?
        .ok_or(AppError::NotFound)?;

    if conversation.side_of(viewer).is_none() {
        return Err(AppError::NotFound);
    }

    Ok(conversation)
}
