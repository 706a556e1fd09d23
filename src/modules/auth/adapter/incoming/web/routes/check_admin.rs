use actix_web::{get, web, Responder};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::schemas::SuccessResponse;
use crate::config::AppConfig;
use crate::shared::api::ApiResponse;

#[derive(Debug, Serialize, ToSchema)]
pub struct AdminModeResponse {
    /// True when the server runs without sign-in for event management
    #[schema(example = false)]
    pub is_admin: bool,
}

/// Report whether admin mode is on
///
/// Admin mode is the `ALLOW_ANONYMOUS_EDIT` bootstrap setting. Clients use it
/// to decide whether to offer the dashboard without signing in.
#[utoipa::path(
    get,
    path = "/api/auth/check-admin",
    tag = "auth",
    responses(
        (status = 200, description = "Admin mode flag", body = inline(SuccessResponse<AdminModeResponse>))
    )
)]
#[get("/api/auth/check-admin")]
pub async fn check_admin_handler(config: web::Data<AppConfig>) -> impl Responder {
    ApiResponse::success(AdminModeResponse {
        is_admin: config.allow_anonymous_edit,
    })
}
