use axum::Json;
use axum_extra::extract::cookie::CookieJar;

use crate::{
    auth::{SessionKind, clear_session},
    models::SuccessResponse,
};

pub async fn logout(jar: CookieJar) -> (CookieJar, Json<SuccessResponse>) {
    (
        clear_session(jar, SessionKind::User),
        Json(SuccessResponse { success: true }),
    )
}
