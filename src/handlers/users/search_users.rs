use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use crate::{AppState, auth::AuthUser, error::AppError, models::*};

#[derive(Deserialize)]
pub struct UserSearchQuery {
    q: Option<String>,
}

pub async fn search_users(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(query): Query<UserSearchQuery>,
) -> Result<Json<Vec<UserSummary>>, AppError> {
    let term = query.q.unwrap_or_default();
    let term = term.trim();
    if term.is_empty() {
        return Ok(Json(Vec::new()));
    }

    let pattern = format!("%{}%", escape_like(term));

    let users: Vec<UserSummary> = sqlx::query_as(
        r#"
        SELECT id, username, full_name, image FROM users
        WHERE is_banned = false
          AND id <> $2
          AND (username ILIKE $1 OR full_name ILIKE $1)
        ORDER BY username
        LIMIT 20
        "#,
    )
    .bind(pattern)
    .bind(auth.user_id)
    .fetch_all(&state.pool)
    .await?;

    Ok(Json(users))
}

pub(crate) fn escape_like(term: &str) -> String {
    term.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}
