use actix_web::HttpResponse;
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::modules::attendee::application::domain::{
    EventAttendee, EventSummary, RegisteredAttendance, UserAttendance, UserSummary,
};
use crate::modules::attendee::application::ports::incoming::use_cases::ListEventAttendeesError;
use crate::shared::api::ApiResponse;

#[derive(Debug, Serialize, ToSchema)]
pub struct UserSummaryResponse {
    pub id: String,
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    #[schema(example = "ada@example.com")]
    pub email: String,
}

impl From<UserSummary> for UserSummaryResponse {
    fn from(user: UserSummary) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name,
            email: user.email,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EventSummaryResponse {
    pub id: String,
    #[schema(example = "Launch")]
    pub title: String,
}

impl From<EventSummary> for EventSummaryResponse {
    fn from(event: EventSummary) -> Self {
        Self {
            id: event.id.to_string(),
            title: event.title,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AttendanceResponse {
    pub id: String,
    pub event_id: String,
    pub user_id: String,
    pub created_at: String,
    pub event: EventSummaryResponse,
    pub user: UserSummaryResponse,
}

impl From<RegisteredAttendance> for AttendanceResponse {
    fn from(r: RegisteredAttendance) -> Self {
        Self {
            id: r.attendance.id.to_string(),
            event_id: r.attendance.event_id.to_string(),
            user_id: r.attendance.user_id.to_string(),
            created_at: r.attendance.created_at.to_rfc3339(),
            event: r.event.into(),
            user: r.user.into(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EventAttendeeResponse {
    pub id: String,
    pub created_at: String,
    pub user: UserSummaryResponse,
}

impl From<EventAttendee> for EventAttendeeResponse {
    fn from(a: EventAttendee) -> Self {
        Self {
            id: a.attendance_id.to_string(),
            created_at: a.registered_at.to_rfc3339(),
            user: a.user.into(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AttendedEventResponse {
    pub id: String,
    #[schema(example = "Launch")]
    pub title: String,
    #[schema(example = "2025-03-01")]
    pub date: String,
    pub location: String,
    pub city: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UserAttendanceResponse {
    pub id: String,
    pub created_at: String,
    pub event: AttendedEventResponse,
}

impl From<UserAttendance> for UserAttendanceResponse {
    fn from(a: UserAttendance) -> Self {
        Self {
            id: a.attendance_id.to_string(),
            created_at: a.registered_at.to_rfc3339(),
            event: AttendedEventResponse {
                id: a.event.id.to_string(),
                title: a.event.title,
                date: a.event.date.format("%Y-%m-%d").to_string(),
                location: a.event.location,
                city: a.event.city,
            },
        }
    }
}

pub(super) fn event_attendees_response(
    result: Result<Vec<EventAttendee>, ListEventAttendeesError>,
) -> HttpResponse {
    match result {
        Ok(list) => ApiResponse::success(
            list.into_iter()
                .map(EventAttendeeResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(ListEventAttendeesError::EventNotFound) => {
            ApiResponse::not_found("EVENT_NOT_FOUND", "Event not found")
        }
        Err(ListEventAttendeesError::QueryError(msg)) => {
            error!("Failed to list event attendees: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
