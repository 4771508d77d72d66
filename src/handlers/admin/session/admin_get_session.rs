use axum::Json;

use crate::{auth::AdminUser, models::AdminSessionResponse};

pub async fn admin_get_session(auth: AdminUser) -> Json<AdminSessionResponse> {
    Json(AdminSessionResponse {
        username: auth.username,
    })
}
