use actix_web::{patch, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use super::dto::{map_field_error, EventResponse};
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::MaybeUser;
use crate::modules::event::application::ports::incoming::use_cases::{
    PatchEventCommand, PatchEventError,
};
use crate::modules::event::application::ports::outgoing::PatchField;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Omitted fields are left untouched; `description: null` clears it.
#[derive(Debug, Deserialize, ToSchema)]
pub struct PatchEventRequest {
    #[serde(default)]
    #[schema(value_type = Option<String>, example = "Launch v2")]
    pub title: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub description: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub location: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub city: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>, example = "2025-03-02")]
    pub date: PatchField<String>,

    #[serde(default, alias = "startTime")]
    #[schema(value_type = Option<String>, example = "10:00")]
    pub start_time: PatchField<String>,

    #[serde(default, alias = "endTime")]
    #[schema(value_type = Option<String>, example = "12:00")]
    pub end_time: PatchField<String>,
}

/// Partially update an event
#[utoipa::path(
    patch,
    path = "/api/events/{event_id}",
    tag = "events",
    params(("event_id" = Uuid, Path, description = "Event id")),
    request_body = PatchEventRequest,
    responses(
        (status = 200, description = "Event updated", body = inline(SuccessResponse<EventResponse>)),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 401, description = "Authentication required", body = ErrorResponse),
        (status = 403, description = "Not the event creator", body = ErrorResponse),
        (status = 404, description = "Event not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = []), ())
)]
#[patch("/api/events/{event_id}")]
pub async fn patch_event_handler(
    user: MaybeUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
    payload: web::Json<PatchEventRequest>,
) -> impl Responder {
    let event_id = path.into_inner();
    let req = payload.into_inner();

    let command = match PatchEventCommand::new(
        req.title,
        req.description,
        req.location,
        req.city,
        req.date,
        req.start_time,
        req.end_time,
    ) {
        Ok(cmd) => cmd,
        Err(err) => return map_field_error(err),
    };

    match data.event.patch.execute(user.user_id, event_id, command).await {
        Ok(event) => ApiResponse::success(EventResponse::from(event)),
        Err(err) => map_patch_error(event_id, err),
    }
}

fn map_patch_error(event_id: Uuid, err: PatchEventError) -> HttpResponse {
    match err {
        PatchEventError::NotFound => ApiResponse::not_found("EVENT_NOT_FOUND", "Event not found"),
        PatchEventError::Unauthorized => {
            ApiResponse::unauthorized("UNAUTHORIZED", "Authentication required")
        }
        PatchEventError::Forbidden => ApiResponse::forbidden(
            "FORBIDDEN",
            "Only the event creator may modify this event",
        ),
        PatchEventError::RepositoryError(msg) => {
            error!("Repository error patching event {}: {}", event_id, msg);
            ApiResponse::internal_error()
        }
    }
}
