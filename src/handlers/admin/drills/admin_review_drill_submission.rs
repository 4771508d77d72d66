use axum::{
    Json,
    extract::{Path, State},
};
use uuid::Uuid;

use crate::{
    AppState,
    auth::AdminUser,
    error::AppError,
    models::*,
    points::{drill_reason, record_points, update_user_ranks},
    validation::optional_text,
};

use super::SUBMISSION_DETAIL_SELECT;

/// Accepts or rejects a submission that is under review. Acceptance credits
/// the drill's points once.
pub async fn admin_review_drill_submission(
    auth: AdminUser,
    State(state): State<AppState>,
    Path(submission_id): Path<Uuid>,
    Json(req): Json<AdminReviewDrillRequest>,
) -> Result<Json<AdminItemResponse<DrillSubmissionDetail>>, AppError> {
    if !matches!(req.decision, DrillStatus::Accepted | DrillStatus::Rejected) {
        return Err(AppError::BadRequest(
            "decision must be accepted or rejected".to_string(),
        ));
    }
    let feedback = optional_text("feedback", req.feedback, 2000)?;

    #[derive(sqlx::FromRow)]
    struct ReviewTarget {
        user_id: Uuid,
        status: String,
        points_credited: bool,
        drill_points: i32,
        drill_title: String,
    }

    let mut tx = state.pool.begin().await?;

    let target: ReviewTarget = sqlx::query_as(
        r#"
        SELECT ds.user_id, ds.status, ds.points_credited,
               d.points AS drill_points, d.title AS drill_title
        FROM drill_submissions ds
        JOIN drills d ON d.id = ds.drill_id
        WHERE ds.id = $1
        FOR UPDATE OF ds
        "#,
    )
    .bind(submission_id)
    .fetch_optional(&mut *tx)
    .await?
    .ok_or(AppError::NotFound)?;

    let current = DrillStatus::parse(&target.status).ok_or_else(|| {
        AppError::InternalError(anyhow::anyhow!("unknown drill status {:?}", target.status))
    })?;

    if !current.can_transition_to(req.decision) {
        return Err(AppError::BadRequest(
            "Only submissions under review can be reviewed".to_string(),
        ));
    }

    let accepted = req.decision == DrillStatus::Accepted;
    let points_awarded = if accepted { target.drill_points } else { 0 };
    let credit = accepted && !target.points_credited && points_awarded > 0;

    sqlx::query(
        r#"
        UPDATE drill_submissions
        SET status = $1,
            feedback = $2,
            points_awarded = $3,
            points_credited = points_credited OR $4,
            reviewed_at = NOW(),
            updated_at = NOW()
        WHERE id = $5
        "#,
    )
    .bind(req.decision.as_str())
    .bind(feedback)
    .bind(points_awarded)
    .bind(credit)
    .bind(submission_id)
    .execute(&mut *tx)
    .await?;

    if credit {
        record_points(
            &mut *tx,
            target.user_id,
            points_awarded,
            &drill_reason(&target.drill_title),
        )
        .await?;
    }

    tx.commit().await?;

    if credit {
        update_user_ranks(&state.pool).await?;
    }

    tracing::info!(
        admin = %auth.username,
        %submission_id,
        decision = req.decision.as_str(),
        points_awarded,
        "drill submission reviewed"
    );

    let item: DrillSubmissionDetail =
        sqlx::query_as(&format!("{SUBMISSION_DETAIL_SELECT} WHERE ds.id = $1"))
            .bind(submission_id)
            .fetch_one(&state.pool)
            .await?;

    Ok(Json(AdminItemResponse { item }))
}
