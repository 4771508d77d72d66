use axum::{Json, extract::State};

use crate::{
    AppState,
    auth::AuthUser,
    error::AppError,
    messaging::UNREAD_COUNT_SQL,
    models::*,
};

pub async fn get_unread_count(
    auth: AuthUser,
    State(state): State<AppState>,
) -> Result<Json<UnreadCountResponse>, AppError> {
    let unread_count: i64 = sqlx::query_scalar(&format!(
        "SELECT COALESCE(SUM(({UNREAD_COUNT_SQL})), 0)::BIGINT FROM conversations c \
         WHERE c.user1_id = $1 OR c.user2_id = $1"
    ))
    .bind(auth.user_id)
    .fetch_one(&state.pool)
    .await?;

    Ok(Json(UnreadCountResponse { unread_count }))
}
