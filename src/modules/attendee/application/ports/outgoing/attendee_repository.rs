use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::attendee::application::domain::RegisteredAttendance;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AttendeeRepositoryError {
    #[error("Event not found")]
    EventNotFound,

    #[error("User not found")]
    UserNotFound,

    #[error("User already registered for this event")]
    AlreadyRegistered,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait AttendeeRepository: Send + Sync {
    /// Atomically records the attendance.
    ///
    /// Preconditions are reported in order: active event, existing user,
    /// no prior attendance. A failed call never creates a row.
    async fn register(
        &self,
        event_id: Uuid,
        user_id: UserId,
    ) -> Result<RegisteredAttendance, AttendeeRepositoryError>;
}
