use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::event::application::domain::{EditPolicy, Event};
use crate::modules::event::application::ports::incoming::use_cases::{
    PatchEventCommand, PatchEventError, PatchEventUseCase,
};
use crate::modules::event::application::ports::outgoing::{
    EventQuery, EventQueryError, EventRepository, EventRepositoryError,
};

pub struct PatchEventService<Q, R>
where
    Q: EventQuery,
    R: EventRepository,
{
    query: Q,
    repository: R,
    policy: EditPolicy,
}

impl<Q, R> PatchEventService<Q, R>
where
    Q: EventQuery,
    R: EventRepository,
{
    pub fn new(query: Q, repository: R, policy: EditPolicy) -> Self {
        Self {
            query,
            repository,
            policy,
        }
    }
}

#[async_trait]
impl<Q, R> PatchEventUseCase for PatchEventService<Q, R>
where
    Q: EventQuery + Send + Sync,
    R: EventRepository + Send + Sync,
{
    async fn execute(
        &self,
        requester: Option<UserId>,
        event_id: Uuid,
        command: PatchEventCommand,
    ) -> Result<Event, PatchEventError> {
        // 1️⃣ Only active events can be edited
        let event = self
            .query
            .find_active(event_id)
            .await
            .map_err(|e| match e {
                EventQueryError::DatabaseError(msg) => PatchEventError::RepositoryError(msg),
            })?
            .ok_or(PatchEventError::NotFound)?;

        // 2️⃣ Creator check
        self.policy.authorize_edit(event.created_by, requester)?;

        let data = command.into_data();
        if data.is_empty() {
            return Ok(event);
        }

        // 3️⃣ Apply
        let updated = self
            .repository
            .patch_event(event_id, data)
            .await
            .map_err(|e| match e {
                EventRepositoryError::NotFound => PatchEventError::NotFound,
                EventRepositoryError::DatabaseError(msg) => PatchEventError::RepositoryError(msg),
            })?;

        info!(%event_id, "Event updated");
        Ok(updated)
    }
}
