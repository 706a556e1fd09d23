use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::event::application::domain::{EditPolicy, Event};
use crate::modules::event::application::ports::incoming::use_cases::{
    RestoreEventError, RestoreEventUseCase,
};
use crate::modules::event::application::ports::outgoing::{
    EventQuery, EventQueryError, EventRepository, EventRepositoryError,
};

pub struct RestoreEventService<Q, R>
where
    Q: EventQuery,
    R: EventRepository,
{
    query: Q,
    repository: R,
    policy: EditPolicy,
}

impl<Q, R> RestoreEventService<Q, R>
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
impl<Q, R> RestoreEventUseCase for RestoreEventService<Q, R>
where
    Q: EventQuery + Send + Sync,
    R: EventRepository + Send + Sync,
{
    async fn execute(
        &self,
        requester: Option<UserId>,
        event_id: Uuid,
    ) -> Result<Event, RestoreEventError> {
        let event = self
            .query
            .find_any(event_id)
            .await
            .map_err(|e| match e {
                EventQueryError::DatabaseError(msg) => RestoreEventError::RepositoryError(msg),
            })?
            .ok_or(RestoreEventError::NotFound)?;

        self.policy.authorize_edit(event.created_by, requester)?;

        if event.is_active() {
            return Ok(event);
        }

        let restored = self
            .repository
            .restore_event(event_id)
            .await
            .map_err(|e| match e {
                EventRepositoryError::NotFound => RestoreEventError::NotFound,
                EventRepositoryError::DatabaseError(msg) => RestoreEventError::RepositoryError(msg),
            })?;

        info!(%event_id, "Event restored");
        Ok(restored)
    }
}
