use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use crate::{
    AppState,
    auth::AdminUser,
    error::AppError,
    handlers::users::search_users::escape_like,
    models::*,
    validation::page,
};

#[derive(Deserialize)]
pub struct AdminUserQuery {
    q: Option<String>,
    banned: Option<bool>,
    limit: Option<i64>,
    offset: Option<i64>,
}

pub async fn admin_get_users(
    _auth: AdminUser,
    State(state): State<AppState>,
    Query(query): Query<AdminUserQuery>,
) -> Result<Json<AdminItemsResponse<AdminUserRow>>, AppError> {
    let (limit, offset) = page(query.limit, query.offset);
    let pattern = query
        .q
        .map(|q| q.trim().to_string())
        .filter(|q| !q.is_empty())
        .map(|q| format!("%{}%", escape_like(&q)));

    let users: Vec<AdminUserRow> = sqlx::query_as(
        r#"
        SELECT id, username, email, full_name, points, rank, is_banned, created_at
        FROM users
        WHERE ($1::text IS NULL OR username ILIKE $1 OR full_name ILIKE $1 OR email ILIKE $1)
          AND ($2::boolean IS NULL OR is_banned = $2)
        ORDER BY created_at DESC
        LIMIT $3 OFFSET $4
        "#,
    )
    .bind(pattern)
    .bind(query.banned)
    .bind(limit)
    .bind(offset)
    .fetch_all(&state.pool)
    .await?;

    Ok(Json(AdminItemsResponse { items: users }))
}
