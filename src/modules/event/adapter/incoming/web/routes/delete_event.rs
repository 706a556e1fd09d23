use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::MaybeUser;
use crate::modules::event::application::ports::incoming::use_cases::SoftDeleteEventError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Soft-delete an event
///
/// The event disappears from public lookups; its row and attendances stay.
#[utoipa::path(
    delete,
    path = "/api/events/{event_id}",
    tag = "events",
    params(("event_id" = Uuid, Path, description = "Event id")),
    responses(
        (status = 204, description = "Event deleted"),
        (status = 401, description = "Authentication required", body = ErrorResponse),
        (status = 403, description = "Not the event creator", body = ErrorResponse),
        (status = 404, description = "Event not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = []), ())
)]
#[delete("/api/events/{event_id}")]
pub async fn delete_event_handler(
    user: MaybeUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let event_id = path.into_inner();

    match data.event.soft_delete.execute(user.user_id, event_id).await {
        Ok(()) => ApiResponse::no_content(),
        Err(SoftDeleteEventError::NotFound) => {
            ApiResponse::not_found("EVENT_NOT_FOUND", "Event not found")
        }
        Err(SoftDeleteEventError::Unauthorized) => {
            ApiResponse::unauthorized("UNAUTHORIZED", "Authentication required")
        }
        Err(SoftDeleteEventError::Forbidden) => ApiResponse::forbidden(
            "FORBIDDEN",
            "Only the event creator may delete this event",
        ),
        Err(SoftDeleteEventError::RepositoryError(msg)) => {
            error!("Repository error deleting event {}: {}", event_id, msg);
            ApiResponse::internal_error()
        }
    }
}
