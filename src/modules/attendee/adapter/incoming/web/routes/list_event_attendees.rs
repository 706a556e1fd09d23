use actix_web::{get, web, Responder};
use uuid::Uuid;

use super::dto::{event_attendees_response, EventAttendeeResponse};
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::AppState;

/// List an event's attendees, newest first
#[utoipa::path(
    get,
    path = "/api/events/{event_id}/attendees",
    tag = "attendees",
    params(("event_id" = Uuid, Path, description = "Event id")),
    responses(
        (status = 200, description = "Attendees", body = inline(SuccessResponse<Vec<EventAttendeeResponse>>)),
        (status = 401, description = "Authentication required", body = ErrorResponse),
        (status = 404, description = "Event not found or deleted", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[get("/api/events/{event_id}/attendees")]
pub async fn list_event_attendees_handler(
    _user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    event_attendees_response(
        data.attendee
            .list_by_event
            .execute(path.into_inner())
            .await,
    )
}
