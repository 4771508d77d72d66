//! REST backend for SportsApp: a social network for athletes with a feed,
//! direct messages, a points economy, drill reviews and tryout applications,
//! plus a JSON moderation console for the single admin account.

use std::{sync::Arc, time::Duration};

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method, header},
    routing::{delete, get, patch, post, put},
};
use sqlx::PgPool;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod messaging;
pub mod models;
pub mod points;
pub mod uploads;
pub mod validation;

use config::Config;
use handlers::*;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(pool: PgPool, config: Config) -> Self {
        Self {
            pool,
            config: Arc::new(config),
        }
    }
}

pub fn router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_mb * 1024 * 1024;

    let user_routes = Router::new()
        .route("/auth/signup", post(signup))
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout))
        .route("/auth/me", get(get_session))
        .route("/users", get(search_users))
        .route("/users/me", get(get_user_profile).put(update_user_profile))
        .route("/users/me/password", put(update_user_password))
        .route(
            "/users/me/avatar",
            post(upload_user_avatar).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route("/users/{id}", get(get_user_by_id))
        .route("/users/{id}/follow", post(follow_user).delete(unfollow_user))
        .route("/posts", get(get_feed).post(create_post))
        .route("/posts/{id}", delete(delete_post))
        .route("/posts/{id}/like", post(like_post).delete(unlike_post))
        .route(
            "/posts/{id}/comments",
            get(get_post_comments).post(create_comment),
        )
        .route(
            "/conversations",
            get(get_conversations).post(start_conversation),
        )
        .route(
            "/conversations/{id}/messages",
            get(get_messages).post(send_message),
        )
        .route("/messages/unread-count", get(get_unread_count))
        .route("/points", get(get_points))
        .route("/rewards", get(get_rewards))
        .route("/rewards/{id}/redeem", post(redeem_reward))
        .route("/redemptions", get(get_my_redemptions))
        .route("/leaderboards", get(get_leaderboards))
        .route("/drills", get(get_drills))
        .route("/drills/submissions", get(get_my_drill_submissions))
        .route(
            "/drills/{id}/submission",
            post(submit_drill).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route("/tryouts", get(get_tryouts))
        .route("/tryouts/applications", get(get_my_applications))
        .route("/tryouts/{id}/apply", post(apply_to_tryout))
        .route("/health", get(health_check));

    let admin_routes = Router::new()
        .route("/login", post(admin_login))
        .route("/logout", post(admin_logout))
        .route("/me", get(admin_get_session))
        .route("/stats", get(admin_get_stats))
        .route("/users", get(admin_get_users))
        .route("/users/{id}/ban", patch(admin_set_user_ban))
        .route("/users/{id}/points", post(admin_adjust_points))
        .route("/posts/{id}", delete(admin_delete_post))
        .route("/comments/{id}", delete(admin_delete_comment))
        .route("/drills", get(admin_get_drills).post(admin_create_drill))
        .route(
            "/drills/{id}",
            put(admin_update_drill).delete(admin_delete_drill),
        )
        .route("/drill-submissions", get(admin_get_drill_submissions))
        .route(
            "/drill-submissions/{id}/review",
            post(admin_review_drill_submission),
        )
        .route("/rewards", get(admin_get_rewards).post(admin_create_reward))
        .route("/rewards/{id}", put(admin_update_reward))
        .route("/redemptions", get(admin_get_redemptions))
        .route("/redemptions/{id}/resolve", post(admin_resolve_redemption))
        .route("/tryouts", get(admin_get_tryouts).post(admin_create_tryout))
        .route(
            "/tryouts/{id}",
            put(admin_update_tryout).delete(admin_delete_tryout),
        )
        .route(
            "/tryouts/{id}/applications",
            get(admin_get_tryout_applications),
        )
        .route("/applications/{id}", patch(admin_update_application));

    let cors = match state.config.frontend_url.parse::<HeaderValue>() {
        Ok(origin) => CorsLayer::new().allow_origin(origin),
        Err(e) => {
            tracing::warn!("Invalid FRONTEND_URL for CORS ({e}), cross-origin requests disabled");
            CorsLayer::new()
        }
    }
    .allow_methods([
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::PATCH,
        Method::DELETE,
        Method::OPTIONS,
    ])
    .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
    .allow_credentials(true)
    .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .nest("/api", user_routes.nest("/admin", admin_routes))
        .nest_service("/uploads", ServeDir::new(&state.config.upload_dir))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
