use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::event::application::domain::Event;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GetActiveEventError {
    #[error("Event not found")]
    NotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetActiveEventUseCase: Send + Sync {
    async fn execute(&self, event_id: Uuid) -> Result<Event, GetActiveEventError>;
}
