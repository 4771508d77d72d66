use axum::Json;
use axum_extra::extract::cookie::CookieJar;

use crate::{
    auth::{SessionKind, clear_session},
    models::AdminSuccessResponse,
};

pub async fn admin_logout(jar: CookieJar) -> (CookieJar, Json<AdminSuccessResponse>) {
    (
        clear_session(jar, SessionKind::Admin),
        Json(AdminSuccessResponse { success: true }),
    )
}
