use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{AppState, auth::AuthUser, error::AppError, models::*, validation::page};

use super::POST_SELECT;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedScope {
    #[default]
    All,
    Following,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedQuery {
    #[serde(default)]
    scope: FeedScope,
    user_id: Option<Uuid>,
    limit: Option<i64>,
    offset: Option<i64>,
}

pub async fn get_feed(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(query): Query<FeedQuery>,
) -> Result<Json<Vec<PostResponse>>, AppError> {
    let (limit, offset) = page(query.limit, query.offset);

    let sql = format!(
        r#"{POST_SELECT}
        WHERE u.is_banned = false
          AND ($2::uuid IS NULL OR p.user_id = $2)
          AND (
              $3 = false
              OR p.user_id = $1
              OR p.user_id IN (SELECT followee_id FROM follows WHERE follower_id = $1)
          )
        ORDER BY p.created_at DESC, p.id DESC
        LIMIT $4 OFFSET $5
        "#
    );

    let rows: Vec<FeedPostRow> = sqlx::query_as(&sql)
        .bind(auth.user_id)
        .bind(query.user_id)
        .bind(query.scope == FeedScope::Following)
        .bind(limit)
        .bind(offset)
        .fetch_all(&state.pool)
        .await?;

    Ok(Json(rows.into_iter().map(PostResponse::from).collect()))
}
