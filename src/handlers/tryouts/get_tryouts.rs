use axum::{Json, extract::State};

use crate::{AppState, auth::AuthUser, error::AppError, models::*};

/// Visible tryouts that haven't happened yet, soonest first.
pub async fn get_tryouts(
    auth: AuthUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<TryoutListing>>, AppError> {
    let tryouts: Vec<TryoutListing> = sqlx::query_as(
        r#"
        SELECT
            t.id, t.title, t.sport, t.location, t.description, t.event_date,
            t.application_deadline,
            EXISTS (
                SELECT 1 FROM tryout_applications a
                WHERE a.tryout_id = t.id AND a.user_id = $1
            ) AS has_applied
        FROM tryouts t
        WHERE t.visible = true AND t.event_date >= NOW()
        ORDER BY t.event_date, t.id
        "#,
    )
    .bind(auth.user_id)
    .fetch_all(&state.pool)
    .await?;

    Ok(Json(tryouts))
}
