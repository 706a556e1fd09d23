use actix_web::{get, web, Responder};
use tracing::error;

use super::dto::EventResponse;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::event::application::ports::incoming::use_cases::ListEventsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// List active events, newest first
#[utoipa::path(
    get,
    path = "/api/events",
    tag = "events",
    responses(
        (status = 200, description = "Active events", body = inline(SuccessResponse<Vec<EventResponse>>)),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/events")]
pub async fn list_events_handler(data: web::Data<AppState>) -> impl Responder {
    match data.event.list.execute().await {
        Ok(events) => ApiResponse::success(
            events
                .into_iter()
                .map(EventResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(ListEventsError::QueryError(msg)) => {
            error!("Failed to list events: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
