use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;
use uuid::Uuid;

use super::dto::AttendanceResponse;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::domain::entities::UserId;
use crate::modules::attendee::application::ports::incoming::use_cases::RegisterAttendeeError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterAttendeeRequest {
    #[serde(alias = "eventId")]
    pub event_id: Uuid,
    #[serde(alias = "userId")]
    pub user_id: Uuid,
}

/// Register a user as attendee of an event
///
/// Called by the scanner after a QR pass is confirmed. Each user can be
/// registered once per event.
#[utoipa::path(
    post,
    path = "/api/attendees",
    tag = "attendees",
    request_body = RegisterAttendeeRequest,
    responses(
        (status = 201, description = "Attendee registered", body = inline(SuccessResponse<AttendanceResponse>)),
        (status = 400, description = "Invalid input or already registered", body = ErrorResponse),
        (status = 401, description = "Authentication required", body = ErrorResponse),
        (status = 404, description = "Event or user not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[post("/api/attendees")]
pub async fn register_attendee_handler(
    operator: AuthenticatedUser,
    data: web::Data<AppState>,
    payload: web::Json<RegisterAttendeeRequest>,
) -> impl Responder {
    let req = payload.into_inner();

    match data
        .attendee
        .register
        .execute(req.event_id, UserId::from(req.user_id))
        .await
    {
        Ok(registered) => {
            info!(operator = %operator.user_id, event_id = %req.event_id, "Check-in recorded");
            ApiResponse::created(AttendanceResponse::from(registered))
        }
        Err(err) => map_register_error(err),
    }
}

fn map_register_error(err: RegisterAttendeeError) -> HttpResponse {
    match err {
        RegisterAttendeeError::EventNotFound => {
            ApiResponse::not_found("EVENT_NOT_FOUND", "Event not found")
        }
        RegisterAttendeeError::UserNotFound => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        RegisterAttendeeError::AlreadyRegistered => ApiResponse::bad_request(
            "ALREADY_REGISTERED",
            "User already registered for this event",
        ),
        RegisterAttendeeError::RepositoryError(msg) => {
            error!("Failed to register attendee: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
