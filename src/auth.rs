//! Session handling for the two principals the API knows about: registered
//! users and the single configured admin.
//!
//! Sessions are signed tokens carried in HttpOnly cookies. Each principal has
//! its own cookie, so signing in as admin in one tab never touches a user
//! session in another. An `Authorization: Bearer` header is accepted too.

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{AppState, config::Config, error::AppError};

pub const USER_COOKIE: &str = "sportsapp_session";
pub const ADMIN_COOKIE: &str = "sportsapp_admin_session";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionKind {
    User,
    Admin,
}

impl SessionKind {
    pub fn cookie_name(self) -> &'static str {
        match self {
            SessionKind::User => USER_COOKIE,
            SessionKind::Admin => ADMIN_COOKIE,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub kind: SessionKind,
    pub iat: i64,
    pub exp: i64,
}

pub fn create_token(config: &Config, kind: SessionKind, subject: &str) -> Result<String, AppError> {
    let now = time::OffsetDateTime::now_utc();
    let claims = Claims {
        sub: subject.to_string(),
        kind,
        iat: now.unix_timestamp(),
        exp: (now + time::Duration::hours(config.session_ttl_hours)).unix_timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
    )
    .map_err(|e| AppError::InternalError(e.into()))
}

pub fn decode_token(config: &Config, token: &str, expected: SessionKind) -> Result<Claims, AppError> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.jwt_secret.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )
    .map_err(|_| AppError::AuthError)?;

    if data.claims.kind != expected {
        return Err(AppError::Forbidden);
    }

    Ok(data.claims)
}

pub fn session_cookie(config: &Config, kind: SessionKind, token: String) -> Cookie<'static> {
    Cookie::build((kind.cookie_name(), token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(config.cookie_secure)
        .max_age(time::Duration::hours(config.session_ttl_hours))
        .build()
}

pub fn clear_session(jar: CookieJar, kind: SessionKind) -> CookieJar {
    jar.remove(Cookie::build(kind.cookie_name()).path("/"))
}

/// Verifies the hardcoded admin login against the configured bcrypt hash.
pub fn verify_admin_credentials(
    config: &Config,
    username: &str,
    password: &str,
) -> Result<bool, AppError> {
    if username != config.admin_username {
        return Ok(false);
    }

    bcrypt::verify(password.as_bytes(), &config.admin_password_hash)
        .map_err(|e| AppError::InternalError(e.into()))
}

fn session_token(parts: &Parts, kind: SessionKind) -> Option<String> {
    let bearer = parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(|t| t.trim().to_string());

    bearer.or_else(|| {
        CookieJar::from_headers(&parts.headers)
            .get(kind.cookie_name())
            .map(|c| c.value().to_string())
    })
}

/// A signed-in, non-banned user.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub user_id: Uuid,
}

impl<S> FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let state = AppState::from_ref(state);

        let token = session_token(parts, SessionKind::User).ok_or(AppError::AuthError)?;
        let claims = decode_token(&state.config, &token, SessionKind::User)?;
        let user_id = Uuid::parse_str(&claims.sub).map_err(|_| AppError::AuthError)?;

        // Bans take effect on live sessions, not only at the next login.
        let banned: Option<bool> = sqlx::query_scalar("SELECT is_banned FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_optional(&state.pool)
            .await?;

        match banned {
            None => Err(AppError::AuthError),
            Some(true) => Err(AppError::Banned),
            Some(false) => Ok(AuthUser { user_id }),
        }
    }
}

/// The admin principal. Never backed by a `users` row.
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub username: String,
}

impl<S> FromRequestParts<S> for AdminUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let state = AppState::from_ref(state);

        let token = session_token(parts, SessionKind::Admin).ok_or(AppError::AuthError)?;
        let claims = decode_token(&state.config, &token, SessionKind::Admin)?;

        if claims.sub != state.config.admin_username {
            return Err(AppError::AuthError);
        }

        Ok(AdminUser {
            username: claims.sub,
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn test_config() -> Config {
        Config {
            database_url: "postgres://localhost/sportsapp_test".to_string(),
            port: 0,
            jwt_secret: "test-secret".to_string(),
            session_ttl_hours: 1,
            admin_username: "admin".to_string(),
            admin_password_hash: bcrypt::hash("letmein-admin", 4).unwrap(),
            frontend_url: "http://localhost:5173".to_string(),
            upload_dir: "uploads".to_string(),
            max_upload_mb: 1,
            cookie_secure: false,
        }
    }

    #[test]
    fn token_round_trips_for_matching_kind() {
        let config = test_config();
        let id = Uuid::new_v4().to_string();
        let token = create_token(&config, SessionKind::User, &id).unwrap();

        let claims = decode_token(&config, &token, SessionKind::User).unwrap();
        assert_eq!(claims.sub, id);
        assert_eq!(claims.kind, SessionKind::User);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn user_token_is_not_an_admin_token() {
        let config = test_config();
        let token = create_token(&config, SessionKind::User, "someone").unwrap();

        let err = decode_token(&config, &token, SessionKind::Admin).unwrap_err();
        assert!(matches!(err, AppError::Forbidden));
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let config = test_config();
        let mut other = test_config();
        other.jwt_secret = "another-secret".to_string();
        let token = create_token(&other, SessionKind::Admin, "admin").unwrap();

        let err = decode_token(&config, &token, SessionKind::Admin).unwrap_err();
        assert!(matches!(err, AppError::AuthError));
    }

    #[test]
    fn admin_credentials_check_name_and_password() {
        let config = test_config();
        assert!(verify_admin_credentials(&config, "admin", "letmein-admin").unwrap());
        assert!(!verify_admin_credentials(&config, "admin", "wrong").unwrap());
        assert!(!verify_admin_credentials(&config, "root", "letmein-admin").unwrap());
    }

    #[test]
    fn session_cookie_is_http_only() {
        let config = test_config();
        let cookie = session_cookie(&config, SessionKind::Admin, "tok".to_string());
        assert_eq!(cookie.name(), ADMIN_COOKIE);
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.path(), Some("/"));
    }
}
