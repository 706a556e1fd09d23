use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::attendee::application::domain::RegisteredAttendance;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegisterAttendeeError {
    #[error("Event not found")]
    EventNotFound,

    #[error("User not found")]
    UserNotFound,

    #[error("User already registered for this event")]
    AlreadyRegistered,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait RegisterAttendeeUseCase: Send + Sync {
    async fn execute(
        &self,
        event_id: Uuid,
        user_id: UserId,
    ) -> Result<RegisteredAttendance, RegisterAttendeeError>;
}
