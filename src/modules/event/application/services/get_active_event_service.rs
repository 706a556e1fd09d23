use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::event::application::domain::Event;
use crate::modules::event::application::ports::incoming::use_cases::{
    GetActiveEventError, GetActiveEventUseCase,
};
use crate::modules::event::application::ports::outgoing::{EventQuery, EventQueryError};

pub struct GetActiveEventService<Q>
where
    Q: EventQuery,
{
    query: Q,
}

impl<Q> GetActiveEventService<Q>
where
    Q: EventQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetActiveEventUseCase for GetActiveEventService<Q>
where
    Q: EventQuery + Send + Sync,
{
    async fn execute(&self, event_id: Uuid) -> Result<Event, GetActiveEventError> {
        self.query
            .find_active(event_id)
            .await
            .map_err(|e| match e {
                EventQueryError::DatabaseError(msg) => GetActiveEventError::QueryError(msg),
            })?
            .ok_or(GetActiveEventError::NotFound)
    }
}
