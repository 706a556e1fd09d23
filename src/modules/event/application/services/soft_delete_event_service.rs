use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::event::application::domain::EditPolicy;
use crate::modules::event::application::ports::incoming::use_cases::{
    SoftDeleteEventError, SoftDeleteEventUseCase,
};
use crate::modules::event::application::ports::outgoing::{
    EventQuery, EventQueryError, EventRepository, EventRepositoryError,
};

pub struct SoftDeleteEventService<Q, R>
where
    Q: EventQuery,
    R: EventRepository,
{
    query: Q,
    repository: R,
    policy: EditPolicy,
}

impl<Q, R> SoftDeleteEventService<Q, R>
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
impl<Q, R> SoftDeleteEventUseCase for SoftDeleteEventService<Q, R>
where
    Q: EventQuery + Send + Sync,
    R: EventRepository + Send + Sync,
{
    async fn execute(
        &self,
        requester: Option<UserId>,
        event_id: Uuid,
    ) -> Result<(), SoftDeleteEventError> {
        let event = self
            .query
            .find_active(event_id)
            .await
            .map_err(|e| match e {
                EventQueryError::DatabaseError(msg) => SoftDeleteEventError::RepositoryError(msg),
            })?
            .ok_or(SoftDeleteEventError::NotFound)?;

        self.policy.authorize_edit(event.created_by, requester)?;

        self.repository
            .soft_delete_event(event_id)
            .await
            .map_err(|e| match e {
                EventRepositoryError::NotFound => SoftDeleteEventError::NotFound,
                EventRepositoryError::DatabaseError(msg) => {
                    SoftDeleteEventError::RepositoryError(msg)
                }
            })?;

        info!(%event_id, "Event soft-deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::event::application::domain::EventStatus;
    use crate::tests::support::fixtures::sample_event;
    use crate::tests::support::in_memory::InMemoryEvents;

    fn service(events: &InMemoryEvents) -> SoftDeleteEventService<InMemoryEvents, InMemoryEvents> {
        SoftDeleteEventService::new(events.clone(), events.clone(), EditPolicy::new(false))
    }

    #[tokio::test]
    async fn soft_delete_hides_event_but_keeps_row() {
        let creator = UserId::from(Uuid::new_v4());
        let event = sample_event("Launch", Some(creator));
        let events = InMemoryEvents::with_events(vec![event.clone()]);

        service(&events).execute(Some(creator), event.id).await.unwrap();

        assert!(events.find_active(event.id).await.unwrap().is_none());
        let raw = events.find_any(event.id).await.unwrap().unwrap();
        assert_eq!(raw.status, EventStatus::Deleted);
    }

    #[tokio::test]
    async fn second_delete_is_not_found() {
        let creator = UserId::from(Uuid::new_v4());
        let event = sample_event("Launch", Some(creator));
        let events = InMemoryEvents::with_events(vec![event.clone()]);
        let svc = service(&events);

        svc.execute(Some(creator), event.id).await.unwrap();
        assert_eq!(
            svc.execute(Some(creator), event.id).await.unwrap_err(),
            SoftDeleteEventError::NotFound
        );
    }

    #[tokio::test]
    async fn non_creator_cannot_delete() {
        let event = sample_event("Launch", Some(UserId::from(Uuid::new_v4())));
        let events = InMemoryEvents::with_events(vec![event.clone()]);

        assert_eq!(
            service(&events)
                .execute(Some(UserId::from(Uuid::new_v4())), event.id)
                .await
                .unwrap_err(),
            SoftDeleteEventError::Forbidden
        );
        assert!(events.find_active(event.id).await.unwrap().is_some());
    }
}
