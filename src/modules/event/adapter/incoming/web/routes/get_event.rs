use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use super::dto::EventResponse;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::event::application::ports::incoming::use_cases::GetActiveEventError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Get an active event
#[utoipa::path(
    get,
    path = "/api/events/{event_id}",
    tag = "events",
    params(("event_id" = Uuid, Path, description = "Event id")),
    responses(
        (status = 200, description = "Event found", body = inline(SuccessResponse<EventResponse>)),
        (status = 404, description = "Event not found or deleted", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/events/{event_id}")]
pub async fn get_event_handler(
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let event_id = path.into_inner();

    match data.event.get_active.execute(event_id).await {
        Ok(event) => ApiResponse::success(EventResponse::from(event)),
        Err(GetActiveEventError::NotFound) => {
            ApiResponse::not_found("EVENT_NOT_FOUND", "Event not found")
        }
        Err(GetActiveEventError::QueryError(msg)) => {
            error!("Failed to load event {}: {}", event_id, msg);
            ApiResponse::internal_error()
        }
    }
}
