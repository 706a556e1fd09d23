use async_trait::async_trait;

use crate::modules::event::application::domain::Event;
use crate::modules::event::application::ports::incoming::use_cases::{
    ListEventsError, ListEventsUseCase,
};
use crate::modules::event::application::ports::outgoing::{EventQuery, EventQueryError};

pub struct ListEventsService<Q>
where
    Q: EventQuery,
{
    query: Q,
}

impl<Q> ListEventsService<Q>
where
    Q: EventQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListEventsUseCase for ListEventsService<Q>
where
    Q: EventQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Event>, ListEventsError> {
        self.query.list_active().await.map_err(|e| match e {
            EventQueryError::DatabaseError(msg) => ListEventsError::QueryError(msg),
        })
    }
}
