use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::event::application::domain::EditDenied;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SoftDeleteEventError {
    #[error("Event not found")]
    NotFound,

    #[error("Authentication required")]
    Unauthorized,

    #[error("Only the event creator may delete this event")]
    Forbidden,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<EditDenied> for SoftDeleteEventError {
    fn from(denied: EditDenied) -> Self {
        match denied {
            EditDenied::Unauthorized => SoftDeleteEventError::Unauthorized,
            EditDenied::Forbidden => SoftDeleteEventError::Forbidden,
        }
    }
}

#[async_trait]
pub trait SoftDeleteEventUseCase: Send + Sync {
    async fn execute(
        &self,
        requester: Option<UserId>,
        event_id: Uuid,
    ) -> Result<(), SoftDeleteEventError>;
}
