use actix_web::{post, web, Responder};
use tracing::error;
use uuid::Uuid;

use super::dto::EventResponse;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::MaybeUser;
use crate::modules::event::application::ports::incoming::use_cases::RestoreEventError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Restore a soft-deleted event
#[utoipa::path(
    post,
    path = "/api/events/{event_id}/restore",
    tag = "events",
    params(("event_id" = Uuid, Path, description = "Event id")),
    responses(
        (status = 200, description = "Event restored", body = inline(SuccessResponse<EventResponse>)),
        (status = 401, description = "Authentication required", body = ErrorResponse),
        (status = 403, description = "Not the event creator", body = ErrorResponse),
        (status = 404, description = "Event not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = []), ())
)]
#[post("/api/events/{event_id}/restore")]
pub async fn restore_event_handler(
    user: MaybeUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let event_id = path.into_inner();

    match data.event.restore.execute(user.user_id, event_id).await {
        Ok(event) => ApiResponse::success(EventResponse::from(event)),
        Err(RestoreEventError::NotFound) => {
            ApiResponse::not_found("EVENT_NOT_FOUND", "Event not found")
        }
        Err(RestoreEventError::Unauthorized) => {
            ApiResponse::unauthorized("UNAUTHORIZED", "Authentication required")
        }
        Err(RestoreEventError::Forbidden) => ApiResponse::forbidden(
            "FORBIDDEN",
            "Only the event creator may restore this event",
        ),
        Err(RestoreEventError::RepositoryError(msg)) => {
            error!("Repository error restoring event {}: {}", event_id, msg);
            ApiResponse::internal_error()
        }
    }
}
