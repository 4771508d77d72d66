use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    AppState,
    auth::AdminUser,
    error::AppError,
    models::*,
    validation::optional_text,
};

/// Moves an application along pending -> shortlisted -> accepted/rejected.
pub async fn admin_update_application(
    auth: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(req): Json<AdminUpdateApplicationRequest>,
) -> Result<Json<AdminItemResponse<TryoutApplication>>, AppError> {
    let admin_note = optional_text("adminNote", req.admin_note, 1000)?;

    let mut tx = state.pool.begin().await?;

    let current: String =
        sqlx::query_scalar("SELECT status FROM tryout_applications WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or(AppError::NotFound)?;

    let current = ApplicationStatus::parse(&current).ok_or_else(|| {
        AppError::InternalError(anyhow::anyhow!("unknown application status {current:?}"))
    })?;

    if !current.can_transition_to(req.status) {
        return Err(AppError::BadRequest(format!(
            "Cannot move an application from {} to {}",
            current.as_str(),
            req.status.as_str()
        )));
    }

    let application: TryoutApplication = sqlx::query_as(
        r#"
        UPDATE tryout_applications
        SET status = $1, admin_note = COALESCE($2, admin_note), updated_at = NOW()
        WHERE id = $3
        RETURNING *
        "#,
    )
    .bind(req.status.as_str())
    .bind(admin_note)
    .bind(id)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;

    tracing::info!(
        admin = %auth.username,
        application_id = id,
        status = req.status.as_str(),
        "tryout application updated"
    );

    Ok(Json(AdminItemResponse { item: application }))
}
