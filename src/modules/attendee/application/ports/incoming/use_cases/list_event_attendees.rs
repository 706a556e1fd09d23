use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::attendee::application::domain::EventAttendee;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ListEventAttendeesError {
    #[error("Event not found")]
    EventNotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait ListEventAttendeesUseCase: Send + Sync {
    async fn execute(&self, event_id: Uuid) -> Result<Vec<EventAttendee>, ListEventAttendeesError>;
}
