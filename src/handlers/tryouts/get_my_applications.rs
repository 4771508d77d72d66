use axum::{Json, extract::State};

use crate::{AppState, auth::AuthUser, error::AppError, models::*};

pub async fn get_my_applications(
    auth: AuthUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<MyApplication>>, AppError> {
    let applications: Vec<MyApplication> = sqlx::query_as(
        r#"
        SELECT
            a.id, a.tryout_id, t.title AS tryout_title, t.sport, t.event_date,
            a.position, a.status, a.created_at
        FROM tryout_applications a
        JOIN tryouts t ON t.id = a.tryout_id
        WHERE a.user_id = $1
        ORDER BY a.created_at DESC
        "#,
    )
    .bind(auth.user_id)
    .fetch_all(&state.pool)
    .await?;

    Ok(Json(applications))
}
