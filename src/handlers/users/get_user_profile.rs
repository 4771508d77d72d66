use axum::{Json, extract::State};

use crate::{
    AppState,
    auth::AuthUser,
    error::AppError,
    models::*,
};

pub async fn get_user_profile(
    auth: AuthUser,
    State(state): State<AppState>,
) -> Result<Json<UserProfileResponse>, AppError> {
    let user: User = sqlx::query_as("SELECT * FROM users WHERE id = $1")
        .bind(auth.user_id)
        .fetch_optional(&state.pool)
        .await?
        .ok_or(AppError::NotFound)?;

    let (followers, following): (i64, i64) = sqlx::query_as(
        r#"
        SELECT
            (SELECT COUNT(*) FROM follows WHERE followee_id = $1),
            (SELECT COUNT(*) FROM follows WHERE follower_id = $1)
        "#,
    )
    .bind(auth.user_id)
    .fetch_one(&state.pool)
    .await?;

    Ok(Json(UserProfileResponse {
        id: user.id,
        username: user.username,
        full_name: user.full_name,
        email: user.email,
        bio: user.bio,
        sport: user.sport,
        location: user.location,
        image: user.image,
        points: user.points,
        rank: user.rank,
        followers,
        following,
        created_at: user.created_at,
    }))
}
