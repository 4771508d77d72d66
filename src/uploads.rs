use std::path::Path;

use crate::error::AppError;

const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov", "webm", "m4v", "avi"];
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "gif"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    fn extensions(self) -> &'static [&'static str] {
        match self {
            MediaKind::Image => IMAGE_EXTENSIONS,
            MediaKind::Video => VIDEO_EXTENSIONS,
        }
    }
}

/// Keeps only the final path component and replaces anything outside
/// `[A-Za-z0-9._-]`, so client file names can't escape the upload directory.
pub fn sanitize_file_name(file_name: &str) -> String {
    let base = file_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .trim_start_matches('.');

    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();

    if cleaned.is_empty() {
        "upload".to_string()
    } else {
        cleaned
    }
}

pub fn check_extension(file_name: &str, kind: MediaKind) -> Result<(), AppError> {
    let ext = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    if kind.extensions().contains(&ext.as_str()) {
        Ok(())
    } else {
        Err(AppError::BadRequest(format!(
            "Unsupported file type. Allowed: {}",
            kind.extensions().join(", ")
        )))
    }
}

/// Writes `data` under `<upload_root>/<subdirectory>/` and returns the public
/// URL path it is served from.
pub async fn save_uploaded_file(
    upload_root: &str,
    subdirectory: &str,
    file_name: &str,
    data: &[u8],
) -> Result<String, AppError> {
    use tokio::io::AsyncWriteExt;

    if data.is_empty() {
        return Err(AppError::BadRequest("Uploaded file is empty".to_string()));
    }

    let upload_dir = format!("{upload_root}/{subdirectory}");

    tokio::fs::create_dir_all(&upload_dir).await.map_err(|e| {
        AppError::InternalError(anyhow::anyhow!("Failed to create upload directory: {e}"))
    })?;

    let unique_filename = format!("{}_{}", uuid::Uuid::new_v4(), sanitize_file_name(file_name));
    let file_path = format!("{upload_dir}/{unique_filename}");

    let mut file = tokio::fs::File::create(&file_path)
        .await
        .map_err(|e| AppError::InternalError(anyhow::anyhow!("Failed to create file: {e}")))?;

    file.write_all(data)
        .await
        .map_err(|e| AppError::InternalError(anyhow::anyhow!("Failed to write file: {e}")))?;

    tracing::info!(path = %file_path, bytes = data.len(), "saved upload");

    Ok(format!("/uploads/{subdirectory}/{unique_filename}"))
}

/// Deletes a file previously returned by [`save_uploaded_file`]. Used when the
/// row that would reference it was never written.
pub async fn remove_uploaded_file(upload_root: &str, url: &str) {
    let Some(relative) = url.strip_prefix("/uploads/") else {
        return;
    };
    if relative.split('/').any(|part| part.is_empty() || part == "..") {
        return;
    }

    let path = format!("{upload_root}/{relative}");
    match tokio::fs::remove_file(&path).await {
        Ok(()) => tracing::info!(path = %path, "removed orphaned upload"),
        Err(e) => tracing::warn!(path = %path, error = %e, "failed to remove upload"),
    }
}
