use axum::{Json, extract::State};

use crate::{AppState, auth::AuthUser, error::AppError, models::*};

use super::{ConversationRow, conversation_select};

pub async fn get_conversations(
    auth: AuthUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<ConversationResponse>>, AppError> {
    let sql = format!(
        "{} WHERE c.user1_id = $1 OR c.user2_id = $1 \
         ORDER BY COALESCE(c.last_message_at, c.created_at) DESC, c.id DESC",
        conversation_select()
    );

    let rows: Vec<ConversationRow> = sqlx::query_as(&sql)
        .bind(auth.user_id)
        .fetch_all(&state.pool)
        .await?;

    Ok(Json(
        rows.into_iter()
            .map(|row| row.into_response(auth.user_id))
            .collect(),
    ))
}
