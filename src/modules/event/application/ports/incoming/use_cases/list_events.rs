use async_trait::async_trait;

use crate::modules::event::application::domain::Event;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ListEventsError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait ListEventsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Event>, ListEventsError>;
}
