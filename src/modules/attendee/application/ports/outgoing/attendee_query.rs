use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::attendee::application::domain::{EventAttendee, UserAttendance};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AttendeeQueryError {
    #[error("Event not found")]
    EventNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait AttendeeQuery: Send + Sync {
    /// Newest first. Fails with `EventNotFound` unless the event is active.
    async fn list_by_event(&self, event_id: Uuid)
        -> Result<Vec<EventAttendee>, AttendeeQueryError>;

    /// Newest first. Attendances of soft-deleted events are hidden; they
    /// reappear if the event is restored.
    async fn list_by_user(&self, user_id: UserId)
        -> Result<Vec<UserAttendance>, AttendeeQueryError>;
}
