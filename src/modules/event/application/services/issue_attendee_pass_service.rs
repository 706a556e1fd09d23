use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::{UserQuery, UserQueryError};
use crate::modules::event::application::ports::incoming::use_cases::{
    AttendeePass, IssueAttendeePassError, IssueAttendeePassUseCase,
};
use crate::modules::event::application::ports::outgoing::{EventQuery, EventQueryError};
use crate::qr;
use crate::qr::application::ports::outgoing::QrRenderer;

/// Renders the check-in QR an attendee shows to the scanner.
pub struct IssueAttendeePassService<Q, U>
where
    Q: EventQuery,
    U: UserQuery,
{
    events: Q,
    users: U,
    renderer: Arc<dyn QrRenderer + Send + Sync>,
}

impl<Q, U> IssueAttendeePassService<Q, U>
where
    Q: EventQuery,
    U: UserQuery,
{
    pub fn new(events: Q, users: U, renderer: Arc<dyn QrRenderer + Send + Sync>) -> Self {
        Self {
            events,
            users,
            renderer,
        }
    }
}

#[async_trait]
impl<Q, U> IssueAttendeePassUseCase for IssueAttendeePassService<Q, U>
where
    Q: EventQuery + Send + Sync,
    U: UserQuery + Send + Sync,
{
    async fn execute(
        &self,
        requester: UserId,
        event_id: Uuid,
        holder: Option<UserId>,
    ) -> Result<AttendeePass, IssueAttendeePassError> {
        let holder = holder.unwrap_or(requester);

        let event = self
            .events
            .find_active(event_id)
            .await
            .map_err(|e| match e {
                EventQueryError::DatabaseError(msg) => IssueAttendeePassError::QueryError(msg),
            })?
            .ok_or(IssueAttendeePassError::EventNotFound)?;

        if holder != requester && event.created_by != Some(requester) {
            return Err(IssueAttendeePassError::Forbidden);
        }

        self.users
            .find_by_id(holder)
            .await
            .map_err(|e| match e {
                UserQueryError::DatabaseError(msg) => IssueAttendeePassError::QueryError(msg),
            })?
            .ok_or(IssueAttendeePassError::UserNotFound)?;

        let payload = qr::encode(&holder.to_string(), &event_id.to_string());

        let qr_image = self
            .renderer
            .render_data_url(&payload)
            .await
            .map_err(|e| IssueAttendeePassError::RenderFailed(e.to_string()))?;

        info!(%event_id, user_id = %holder, "Attendee pass issued");

        Ok(AttendeePass {
            event_id,
            user_id: holder,
            payload,
            qr_image,
        })
    }
}
