use actix_web::{get, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::domain::entities::UserId;
use crate::modules::event::application::ports::incoming::use_cases::{
    AttendeePass, IssueAttendeePassError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, IntoParams)]
pub struct AttendeePassQuery {
    /// Pass holder; defaults to the caller
    #[serde(default, alias = "userId")]
    pub user_id: Option<Uuid>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AttendeePassResponse {
    pub event_id: String,
    pub user_id: String,
    /// Text carried by the QR code
    #[schema(example = r#"{"id_user":"...","id_event":"..."}"#)]
    pub payload: String,
    /// PNG data URL
    pub qr_image: String,
}

impl From<AttendeePass> for AttendeePassResponse {
    fn from(pass: AttendeePass) -> Self {
        Self {
            event_id: pass.event_id.to_string(),
            user_id: pass.user_id.to_string(),
            payload: pass.payload,
            qr_image: pass.qr_image,
        }
    }
}

/// Issue an attendee check-in pass
///
/// Renders the QR code an attendee presents at the door. Callers may request
/// their own pass; the event creator may request any user's pass.
#[utoipa::path(
    get,
    path = "/api/events/{event_id}/pass",
    tag = "events",
    params(
        ("event_id" = Uuid, Path, description = "Event id"),
        AttendeePassQuery
    ),
    responses(
        (status = 200, description = "Pass issued", body = inline(SuccessResponse<AttendeePassResponse>)),
        (status = 401, description = "Authentication required", body = ErrorResponse),
        (status = 403, description = "Not allowed to issue this pass", body = ErrorResponse),
        (status = 404, description = "Event or user not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[get("/api/events/{event_id}/pass")]
pub async fn attendee_pass_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    query: web::Query<AttendeePassQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let event_id = path.into_inner();
    let holder = query.into_inner().user_id.map(UserId::from);

    match data
        .event
        .issue_pass
        .execute(user.user_id, event_id, holder)
        .await
    {
        Ok(pass) => ApiResponse::success(AttendeePassResponse::from(pass)),
        Err(err) => map_pass_error(event_id, err),
    }
}

fn map_pass_error(event_id: Uuid, err: IssueAttendeePassError) -> HttpResponse {
    match err {
        IssueAttendeePassError::EventNotFound => {
            ApiResponse::not_found("EVENT_NOT_FOUND", "Event not found")
        }
        IssueAttendeePassError::UserNotFound => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        IssueAttendeePassError::Forbidden => ApiResponse::forbidden(
            "FORBIDDEN",
            "Passes can only be issued to the holder or the event creator",
        ),
        IssueAttendeePassError::RenderFailed(msg) | IssueAttendeePassError::QueryError(msg) => {
            error!("Failed to issue pass for event {}: {}", event_id, msg);
            ApiResponse::internal_error()
        }
    }
}
