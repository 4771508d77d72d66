use std::{env, fmt::Display, str::FromStr};

use anyhow::{Context, anyhow};
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub jwt_secret: String,
    pub session_ttl_hours: i64,
    pub admin_username: String,
    pub admin_password_hash: String,
    pub frontend_url: String,
    pub upload_dir: String,
    pub max_upload_mb: usize,
    pub cookie_secure: bool,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        if let Err(e) = dotenvy::dotenv() {
            info!("No .env file loaded: {e}");
        }

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            port: try_load("PORT", "8080")?,
            jwt_secret: required("JWT_SECRET")?,
            session_ttl_hours: try_load("SESSION_TTL_HOURS", "168")?,
            admin_username: try_load("ADMIN_USERNAME", "admin")?,
            admin_password_hash: required("ADMIN_PASSWORD_HASH")?,
            frontend_url: try_load("FRONTEND_URL", "http://localhost:5173")?,
            upload_dir: try_load("UPLOAD_DIR", "uploads")?,
            max_upload_mb: try_load("MAX_UPLOAD_MB", "50")?,
            cookie_secure: parse_flag(&try_load::<String>("COOKIE_SECURE", "false")?)
                .ok_or_else(|| anyhow!("Invalid COOKIE_SECURE value"))?,
        })
    }
}

fn required(key: &str) -> anyhow::Result<String> {
    let value = env::var(key).with_context(|| format!("{key} must be set"))?;
    if value.trim().is_empty() {
        return Err(anyhow!("{key} must not be empty"));
    }
    Ok(value)
}

fn try_load<T: FromStr>(key: &str, default: &str) -> anyhow::Result<T>
where
    T::Err: Display,
{
    let raw = env::var(key).unwrap_or_else(|_| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    raw.parse().map_err(|e| {
        warn!("Invalid {key} value: {e}");
        anyhow!("Invalid {key} value {raw:?}: {e}")
    })
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_accept_common_spellings() {
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag(" on "), Some(true));
        assert_eq!(parse_flag("0"), Some(false));
        assert_eq!(parse_flag("no"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    fn defaults_are_parsed_when_unset() {
        let port: u16 = try_load("SPORTSAPP_TEST_UNSET_PORT", "8080").unwrap();
        assert_eq!(port, 8080);
    }

    #[test]
    fn bad_default_is_rejected() {
        let parsed: anyhow::Result<u16> = try_load("SPORTSAPP_TEST_UNSET_PORT_2", "eighty");
        assert!(parsed.is_err());
    }
}
