use axum::{
    Json,
    extract::{Multipart, State},
};

use crate::{
    AppState,
    auth::AuthUser,
    error::AppError,
    models::*,
    uploads::{MediaKind, check_extension, remove_uploaded_file, save_uploaded_file},
};

pub async fn upload_user_avatar(
    auth: AuthUser,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadAvatarResponse>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some("avatar") {
            continue;
        }

        let file_name = field.file_name().unwrap_or("avatar.jpg").to_string();
        check_extension(&file_name, MediaKind::Image)?;

        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(format!("Failed to read avatar: {e}")))?;

        let image_url =
            save_uploaded_file(&state.config.upload_dir, "avatars", &file_name, &data).await?;

        let updated = sqlx::query("UPDATE users SET image = $1, updated_at = NOW() WHERE id = $2")
            .bind(&image_url)
            .bind(auth.user_id)
            .execute(&state.pool)
            .await;

        if let Err(e) = updated {
            remove_uploaded_file(&state.config.upload_dir, &image_url).await;
            return Err(e.into());
        }

        return Ok(Json(UploadAvatarResponse { image_url }));
    }

    Err(AppError::BadRequest("No avatar file provided".to_string()))
}
