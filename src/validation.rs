use crate::error::AppError;

/// Trims `value` and checks it is non-empty and at most `max` characters.
pub fn required_text(field: &str, value: &str, max: usize) -> Result<String, AppError> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Err(AppError::BadRequest(format!("{field} must not be empty")));
    }
    if trimmed.chars().count() > max {
        return Err(AppError::BadRequest(format!(
            "{field} must be at most {max} characters"
        )));
    }

    Ok(trimmed.to_string())
}

/// Like [`required_text`] but maps blank input to `None`.
pub fn optional_text(field: &str, value: Option<String>, max: usize) -> Result<Option<String>, AppError> {
    match value {
        Some(v) if !v.trim().is_empty() => required_text(field, &v, max).map(Some),
        _ => Ok(None),
    }
}

pub fn validate_username(username: &str) -> Result<String, AppError> {
    let username = username.trim();
    let valid_len = (3..=30).contains(&username.len());
    let valid_chars = username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_');

    if !valid_len || !valid_chars {
        return Err(AppError::BadRequest(
            "username must be 3-30 characters of letters, digits or underscores".to_string(),
        ));
    }

    Ok(username.to_string())
}

pub fn validate_email(email: &str) -> Result<String, AppError> {
    let email = email.trim().to_ascii_lowercase();

    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() && !domain.contains('@') => {
            Ok(email)
        }
        _ => Err(AppError::BadRequest("email is not valid".to_string())),
    }
}

pub fn validate_password(password: &str) -> Result<(), AppError> {
    if password.chars().count() < 8 {
        return Err(AppError::BadRequest(
            "password must be at least 8 characters".to_string(),
        ));
    }
    Ok(())
}

/// Clamps a requested page to `1..=50` rows (default 20) and a non-negative offset.
pub fn page(limit: Option<i64>, offset: Option<i64>) -> (i64, i64) {
    (limit.unwrap_or(20).clamp(1, 50), offset.unwrap_or(0).max(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_is_trimmed_and_bounded() {
        assert_eq!(required_text("content", "  six!  ", 10).unwrap(), "six!");
        assert!(required_text("content", "   ", 10).is_err());
        assert!(required_text("content", "abcdefghijk", 10).is_err());
        assert_eq!(optional_text("bio", Some("  ".into()), 10).unwrap(), None);
        assert_eq!(
            optional_text("bio", Some(" spinner ".into()), 10).unwrap(),
            Some("spinner".into())
        );
    }

    #[test]
    fn usernames_are_restricted() {
        assert_eq!(validate_username(" fast_bowler ").unwrap(), "fast_bowler");
        assert!(validate_username("ab").is_err());
        assert!(validate_username("has space").is_err());
        assert!(validate_username(&"x".repeat(31)).is_err());
    }

    #[test]
    fn emails_are_normalised() {
        assert_eq!(validate_email(" Coach@Club.ORG ").unwrap(), "coach@club.org");
        assert!(validate_email("no-at-sign").is_err());
        assert!(validate_email("@club.org").is_err());
        assert!(validate_email("coach@").is_err());
        assert!(validate_email("coach@club@org").is_err());
        assert_eq!(validate_email("coach@localhost").unwrap(), "coach@localhost");
    }

    #[test]
    fn short_passwords_are_rejected() {
        assert!(validate_password("1234567").is_err());
        assert!(validate_password("12345678").is_ok());
    }

    #[test]
    fn pages_are_clamped() {
        assert_eq!(page(None, None), (20, 0));
        assert_eq!(page(Some(500), Some(-3)), (50, 0));
        assert_eq!(page(Some(0), Some(40)), (1, 40));
    }
}
