use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

/// QR pass an attendee presents at the door.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttendeePass {
    pub event_id: Uuid,
    pub user_id: UserId,
    /// Codec text embedded in the QR image
    pub payload: String,
    /// PNG data URL
    pub qr_image: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IssueAttendeePassError {
    #[error("Event not found")]
    EventNotFound,

    #[error("User not found")]
    UserNotFound,

    #[error("Passes can only be issued to the holder or the event creator")]
    Forbidden,

    #[error("QR rendering failed: {0}")]
    RenderFailed(String),

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait IssueAttendeePassUseCase: Send + Sync {
    /// `holder` defaults to the requester.
    async fn execute(
        &self,
        requester: UserId,
        event_id: Uuid,
        holder: Option<UserId>,
    ) -> Result<AttendeePass, IssueAttendeePassError>;
}
