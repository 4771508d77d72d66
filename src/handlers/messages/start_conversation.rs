use axum::{Json, extract::State, http::StatusCode};

use crate::{
    AppState,
    auth::AuthUser,
    error::AppError,
    messaging::ordered_pair,
    models::*,
};

use super::{ConversationRow, conversation_select};

/// Opens (or reuses) the one conversation between the caller and `userId`.
pub async fn start_conversation(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(req): Json<StartConversationRequest>,
) -> Result<(StatusCode, Json<ConversationResponse>), AppError> {
    if req.user_id == auth.user_id {
        return Err(AppError::BadRequest(
            "You cannot start a conversation with yourself".to_string(),
        ));
    }

    let partner_banned: Option<bool> =
        sqlx::query_scalar("SELECT is_banned FROM users WHERE id = $1")
            .bind(req.user_id)
            .fetch_optional(&state.pool)
            .await?;
    if partner_banned != Some(false) {
        return Err(AppError::NotFound);
    }

    let (user1_id, user2_id) = ordered_pair(auth.user_id, req.user_id);

    let inserted = sqlx::query(
        "INSERT INTO conversations (user1_id, user2_id) VALUES ($1, $2) \
         ON CONFLICT (user1_id, user2_id) DO NOTHING",
    )
    .bind(user1_id)
    .bind(user2_id)
    .execute(&state.pool)
    .await?
    .rows_affected();

    let row: ConversationRow = sqlx::query_as(&format!(
        "{} WHERE c.user1_id = $2 AND c.user2_id = $3",
        conversation_select()
    ))
    .bind(auth.user_id)
    .bind(user1_id)
    .bind(user2_id)
    .fetch_one(&state.pool)
    .await?;

    let status = if inserted == 1 {
        tracing::info!(%user1_id, %user2_id, "conversation started");
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((status, Json(row.into_response(auth.user_id))))
}
