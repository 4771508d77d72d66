use axum::{
    Json,
    extract::{Path, State},
};
use uuid::Uuid;

use crate::{AppState, auth::AuthUser, error::AppError, models::*};

pub async fn get_user_by_id(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PublicProfileResponse>, AppError> {
    let user: User = sqlx::query_as("SELECT * FROM users WHERE id = $1 AND is_banned = false")
        .bind(id)
        .fetch_optional(&state.pool)
        .await?
        .ok_or(AppError::NotFound)?;

    let (followers, following, is_following): (i64, i64, bool) = sqlx::query_as(
        r#"
        SELECT
            (SELECT COUNT(*) FROM follows WHERE followee_id = $1),
            (SELECT COUNT(*) FROM follows WHERE follower_id = $1),
            EXISTS (SELECT 1 FROM follows WHERE follower_id = $2 AND followee_id = $1)
        "#,
    )
    .bind(id)
    .bind(auth.user_id)
    .fetch_one(&state.pool)
    .await?;

    Ok(Json(PublicProfileResponse {
        id: user.id,
        username: user.username,
        full_name: user.full_name,
        bio: user.bio,
        sport: user.sport,
        location: user.location,
        image: user.image,
        points: user.points,
        rank: user.rank,
        followers,
        following,
        is_following,
    }))
}
