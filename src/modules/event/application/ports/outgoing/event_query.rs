use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::event::application::domain::Event;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EventQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait EventQuery: Send + Sync {
    /// Active events only.
    async fn find_active(&self, event_id: Uuid) -> Result<Option<Event>, EventQueryError>;

    /// Ignores the deletion flag. Used by restore.
    async fn find_any(&self, event_id: Uuid) -> Result<Option<Event>, EventQueryError>;

    /// Active events, newest first.
    async fn list_active(&self) -> Result<Vec<Event>, EventQueryError>;
}
