use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::event::application::domain::{EditDenied, Event};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RestoreEventError {
    #[error("Event not found")]
    NotFound,

    #[error("Authentication required")]
    Unauthorized,

    #[error("Only the event creator may restore this event")]
    Forbidden,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<EditDenied> for RestoreEventError {
    fn from(denied: EditDenied) -> Self {
        match denied {
            EditDenied::Unauthorized => RestoreEventError::Unauthorized,
            EditDenied::Forbidden => RestoreEventError::Forbidden,
        }
    }
}

/// Administrative undelete. Restoring an active event returns it unchanged.
#[async_trait]
pub trait RestoreEventUseCase: Send + Sync {
    async fn execute(
        &self,
        requester: Option<UserId>,
        event_id: Uuid,
    ) -> Result<Event, RestoreEventError>;
}
