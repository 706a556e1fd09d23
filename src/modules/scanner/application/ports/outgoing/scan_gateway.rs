use async_trait::async_trait;

use crate::modules::scanner::application::domain::{ScanReceipt, ScannedEvent};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    #[error("Event not found")]
    EventNotFound,

    #[error("User not found")]
    UserNotFound,

    #[error("Attendee already registered for this event")]
    AlreadyRegistered,

    #[error("Not authorized to register attendees")]
    Unauthorized,

    #[error("Service unavailable: {0}")]
    Unavailable(String),
}

/// Event lookup and registration as seen from the door
#[async_trait]
pub trait ScanGateway: Send + Sync {
    async fn find_event(&self, event_id: &str) -> Result<ScannedEvent, GatewayError>;

    async fn register(&self, event_id: &str, user_id: &str) -> Result<ScanReceipt, GatewayError>;
}
