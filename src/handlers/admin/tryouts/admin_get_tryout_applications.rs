use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    AppState,
    auth::AdminUser,
    error::AppError,
    models::*,
};

pub async fn admin_get_tryout_applications(
    _auth: AdminUser,
    State(state): State<AppState>,
    Path(tryout_id): Path<i32>,
) -> Result<Json<AdminItemsResponse<AdminApplicationRow>>, AppError> {
    let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM tryouts WHERE id = $1)")
        .bind(tryout_id)
        .fetch_one(&state.pool)
        .await?;

    if !exists {
        return Err(AppError::NotFound);
    }

    let applications: Vec<AdminApplicationRow> = sqlx::query_as(
        r#"
        SELECT
            ta.id, ta.tryout_id, ta.user_id, u.username, u.full_name, u.email,
            ta.position, ta.experience, ta.message, ta.status, ta.admin_note, ta.created_at
        FROM tryout_applications ta
        JOIN users u ON u.id = ta.user_id
        WHERE ta.tryout_id = $1
        ORDER BY ta.created_at
        "#,
    )
    .bind(tryout_id)
    .fetch_all(&state.pool)
    .await?;

    Ok(Json(AdminItemsResponse {
        items: applications,
    }))
}
