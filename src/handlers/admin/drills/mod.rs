pub mod admin_create_drill;
pub mod admin_delete_drill;
pub mod admin_get_drill_submissions;
pub mod admin_get_drills;
pub mod admin_review_drill_submission;
pub mod admin_update_drill;

pub use admin_create_drill::admin_create_drill;
pub use admin_delete_drill::admin_delete_drill;
pub use admin_get_drill_submissions::admin_get_drill_submissions;
pub use admin_get_drills::admin_get_drills;
pub use admin_review_drill_submission::admin_review_drill_submission;
pub use admin_update_drill::admin_update_drill;

pub(crate) const SUBMISSION_DETAIL_SELECT: &str = r#"
    SELECT
        ds.id, ds.user_id, u.username, ds.drill_id, d.title AS drill_title,
        ds.video_url, ds.notes, ds.status, ds.feedback, ds.points_awarded,
        ds.submitted_at, ds.reviewed_at
    FROM drill_submissions ds
    JOIN users u ON u.id = ds.user_id
    JOIN drills d ON d.id = ds.drill_id
"#;

pub(crate) const DIFFICULTIES: &[&str] = &["beginner", "intermediate", "advanced"];

pub(crate) fn check_difficulty(difficulty: &str) -> Result<(), crate::error::AppError> {
    if DIFFICULTIES.contains(&difficulty) {
        Ok(())
    } else {
        Err(crate::error::AppError::BadRequest(format!(
            "difficulty must be one of: {}",
            DIFFICULTIES.join(", ")
        )))
    }
}
