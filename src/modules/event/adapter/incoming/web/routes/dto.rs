use actix_web::HttpResponse;
use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::event::application::domain::validation::EventFieldError;
use crate::modules::event::application::domain::{Event, EventStatus};
use crate::shared::api::ApiResponse;

#[derive(Debug, Serialize, ToSchema)]
pub struct EventResponse {
    #[schema(example = "3f2b8c1e-8a4d-4b7e-9a55-2f0c6d1e9b10")]
    pub id: String,
    #[schema(example = "Launch")]
    pub title: String,
    pub description: Option<String>,
    #[schema(example = "Hall A")]
    pub location: String,
    #[schema(example = "Jakarta")]
    pub city: String,
    #[schema(example = "2025-03-01")]
    pub date: String,
    #[schema(example = "09:00")]
    pub start_time: String,
    #[schema(example = "11:00")]
    pub end_time: String,
    pub created_by: Option<String>,
    /// PNG data URL of the event page link
    pub qr_image: Option<String>,
    #[schema(example = "active")]
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Event> for EventResponse {
    fn from(event: Event) -> Self {
        Self {
            id: event.id.to_string(),
            title: event.title,
            description: event.description,
            location: event.location,
            city: event.city,
            date: event.date.format("%Y-%m-%d").to_string(),
            start_time: event.start_time,
            end_time: event.end_time,
            created_by: event.created_by.map(|id| id.to_string()),
            qr_image: event.qr_image,
            status: match event.status {
                EventStatus::Active => "active".to_string(),
                EventStatus::Deleted => "deleted".to_string(),
            },
            created_at: event.created_at.to_rfc3339(),
            updated_at: event.updated_at.to_rfc3339(),
        }
    }
}

pub(super) fn map_field_error(err: EventFieldError) -> HttpResponse {
    let code = match err {
        EventFieldError::EmptyTitle => "EMPTY_TITLE",
        EventFieldError::TitleTooLong => "TITLE_TOO_LONG",
        EventFieldError::EmptyLocation => "EMPTY_LOCATION",
        EventFieldError::EmptyCity => "EMPTY_CITY",
        EventFieldError::InvalidDate => "INVALID_DATE",
        EventFieldError::InvalidStartTime => "INVALID_START_TIME",
        EventFieldError::InvalidEndTime => "INVALID_END_TIME",
    };
    ApiResponse::bad_request(code, &err.to_string())
}
