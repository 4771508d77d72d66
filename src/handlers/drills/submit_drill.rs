use axum::{
    Json,
    extract::{Multipart, Path, State},
    http::StatusCode,
};

use crate::{
    AppState,
    auth::AuthUser,
    error::AppError,
    models::*,
    uploads::{MediaKind, check_extension, remove_uploaded_file, save_uploaded_file},
    validation::optional_text,
};

/// Uploads a drill video and puts the submission under review. A rejected
/// submission is replaced in place, so each user has at most one row per drill.
pub async fn submit_drill(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(drill_id): Path<i32>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<DrillSubmission>), AppError> {
    let drill: Drill = sqlx::query_as("SELECT * FROM drills WHERE id = $1 AND visible = true")
        .bind(drill_id)
        .fetch_optional(&state.pool)
        .await?
        .ok_or(AppError::NotFound)?;

    let current: Option<String> = sqlx::query_scalar(
        "SELECT status FROM drill_submissions WHERE user_id = $1 AND drill_id = $2",
    )
    .bind(auth.user_id)
    .bind(drill_id)
    .fetch_optional(&state.pool)
    .await?;

    let current = match current.as_deref() {
        None => DrillStatus::NotSubmitted,
        Some(s) => DrillStatus::parse(s).ok_or_else(|| {
            AppError::InternalError(anyhow::anyhow!("unknown drill status {s:?}"))
        })?,
    };

    if !current.can_submit() {
        let reason = match current {
            DrillStatus::Accepted => "This drill has already been accepted",
            _ => "Your previous submission is still under review",
        };
        return Err(AppError::BadRequest(reason.to_string()));
    }

    let mut video: Option<(String, axum::body::Bytes)> = None;
    let mut notes: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid multipart body: {e}")))?
    {
        let field_name = field.name().unwrap_or("").to_string();

        match field_name.as_str() {
            "video" => {
                let file_name = field.file_name().unwrap_or("drill.mp4").to_string();
                check_extension(&file_name, MediaKind::Video)?;
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("Failed to read video: {e}")))?;
                video = Some((file_name, data));
            }
            "notes" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("Failed to read notes: {e}")))?;
                notes = optional_text("notes", Some(text), 1000)?;
            }
            other => {
                tracing::debug!(field = other, "ignoring multipart field");
            }
        }
    }

    let (file_name, data) =
        video.ok_or_else(|| AppError::BadRequest("No video file provided".to_string()))?;

    let video_url = save_uploaded_file(&state.config.upload_dir, "drills", &file_name, &data).await?;

    let upserted: Result<Option<DrillSubmission>, sqlx::Error> = sqlx::query_as(
        r#"
        INSERT INTO drill_submissions (user_id, drill_id, video_url, notes, status)
        VALUES ($1, $2, $3, $4, 'under_review')
        ON CONFLICT (user_id, drill_id) DO UPDATE
        SET video_url = EXCLUDED.video_url,
            notes = EXCLUDED.notes,
            status = 'under_review',
            feedback = NULL,
            reviewed_at = NULL,
            submitted_at = NOW(),
            updated_at = NOW()
        WHERE drill_submissions.status = 'rejected'
        RETURNING *
        "#,
    )
    .bind(auth.user_id)
    .bind(drill_id)
    .bind(&video_url)
    .bind(notes)
    .fetch_optional(&state.pool)
    .await;

    let submission = match upserted {
        Ok(Some(submission)) => submission,
        // Lost a race with another upload for the same drill.
        Ok(None) => {
            remove_uploaded_file(&state.config.upload_dir, &video_url).await;
            return Err(AppError::Conflict(
                "A submission for this drill is already under review".to_string(),
            ));
        }
        Err(e) => {
            remove_uploaded_file(&state.config.upload_dir, &video_url).await;
            return Err(e.into());
        }
    };

    tracing::info!(
        user_id = %auth.user_id,
        drill_id,
        submission_id = %submission.id,
        "drill submitted for review: {}",
        drill.title
    );

    Ok((StatusCode::CREATED, Json(submission)))
}
