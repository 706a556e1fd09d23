use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

/// One user's registration at one event. Never updated or deleted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attendance {
    pub id: Uuid,
    pub event_id: Uuid,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventSummary {
    pub id: Uuid,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventDetails {
    pub id: Uuid,
    pub title: String,
    pub date: NaiveDate,
    pub location: String,
    pub city: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserSummary {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

/// Result of a successful registration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegisteredAttendance {
    pub attendance: Attendance,
    pub event: EventSummary,
    pub user: UserSummary,
}

/// Row of an event's attendee list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventAttendee {
    pub attendance_id: Uuid,
    pub registered_at: DateTime<Utc>,
    pub user: UserSummary,
}

/// Row of a user's attendance history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserAttendance {
    pub attendance_id: Uuid,
    pub registered_at: DateTime<Utc>,
    pub event: EventDetails,
}
