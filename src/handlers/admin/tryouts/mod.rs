pub mod admin_create_tryout;
pub mod admin_delete_tryout;
pub mod admin_get_tryout_applications;
pub mod admin_get_tryouts;
pub mod admin_update_application;
pub mod admin_update_tryout;

pub use admin_create_tryout::admin_create_tryout;
pub use admin_delete_tryout::admin_delete_tryout;
pub use admin_get_tryout_applications::admin_get_tryout_applications;
pub use admin_get_tryouts::admin_get_tryouts;
pub use admin_update_application::admin_update_application;
pub use admin_update_tryout::admin_update_tryout;

use time::OffsetDateTime;

use crate::error::AppError;

pub(crate) fn check_deadline(
    event_date: OffsetDateTime,
    application_deadline: Option<OffsetDateTime>,
) -> Result<(), AppError> {
    match application_deadline {
        Some(deadline) if deadline > event_date => Err(AppError::BadRequest(
            "applicationDeadline must not be after eventDate".to_string(),
        )),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn deadline_may_not_follow_the_event() {
        let event = datetime!(2026-11-20 09:00 UTC);

        assert!(check_deadline(event, None).is_ok());
        assert!(check_deadline(event, Some(datetime!(2026-11-15 23:59 UTC))).is_ok());
        assert!(check_deadline(event, Some(event)).is_ok());
        assert!(check_deadline(event, Some(datetime!(2026-11-21 00:00 UTC))).is_err());
    }
}
