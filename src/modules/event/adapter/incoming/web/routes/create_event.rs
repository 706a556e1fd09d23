use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

use super::dto::{map_field_error, EventResponse};
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::MaybeUser;
use crate::modules::event::application::ports::incoming::use_cases::{
    CreateEventCommand, CreateEventError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateEventRequest {
    #[schema(example = "Launch")]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[schema(example = "Hall A")]
    pub location: String,
    #[schema(example = "Jakarta")]
    pub city: String,
    /// `YYYY-MM-DD`
    #[schema(example = "2025-03-01")]
    pub date: String,
    /// `HH:mm`, 24-hour
    #[serde(alias = "startTime")]
    #[schema(example = "09:00")]
    pub start_time: String,
    /// `HH:mm`, 24-hour
    #[serde(alias = "endTime")]
    #[schema(example = "11:00")]
    pub end_time: String,
}

/// Create an event
///
/// Anonymous callers are accepted only when anonymous editing is enabled.
#[utoipa::path(
    post,
    path = "/api/events",
    tag = "events",
    request_body = CreateEventRequest,
    responses(
        (status = 201, description = "Event created", body = inline(SuccessResponse<EventResponse>)),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 401, description = "Authentication required", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = []), ())
)]
#[post("/api/events")]
pub async fn create_event_handler(
    user: MaybeUser,
    data: web::Data<AppState>,
    payload: web::Json<CreateEventRequest>,
) -> impl Responder {
    let payload = payload.into_inner();

    let command = match CreateEventCommand::new(
        &payload.title,
        payload.description,
        &payload.location,
        &payload.city,
        &payload.date,
        &payload.start_time,
        &payload.end_time,
    ) {
        Ok(cmd) => cmd,
        Err(err) => return map_field_error(err),
    };

    match data.event.create.execute(user.user_id, command).await {
        Ok(event) => ApiResponse::created(EventResponse::from(event)),
        Err(err) => map_create_error(err),
    }
}

fn map_create_error(err: CreateEventError) -> HttpResponse {
    match err {
        CreateEventError::Unauthorized => {
            ApiResponse::unauthorized("UNAUTHORIZED", "Authentication required")
        }
        CreateEventError::RepositoryError(msg) => {
            error!("Failed to create event: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
