use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::attendee::application::domain::EventAttendee;
use crate::modules::attendee::application::ports::incoming::use_cases::{
    ListEventAttendeesError, ListEventAttendeesUseCase,
};
use crate::modules::attendee::application::ports::outgoing::{AttendeeQuery, AttendeeQueryError};

pub struct ListEventAttendeesService<Q>
where
    Q: AttendeeQuery,
{
    query: Q,
}

impl<Q> ListEventAttendeesService<Q>
where
    Q: AttendeeQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListEventAttendeesUseCase for ListEventAttendeesService<Q>
where
    Q: AttendeeQuery + Send + Sync,
{
    async fn execute(&self, event_id: Uuid) -> Result<Vec<EventAttendee>, ListEventAttendeesError> {
        self.query
            .list_by_event(event_id)
            .await
            .map_err(|e| match e {
                AttendeeQueryError::EventNotFound => ListEventAttendeesError::EventNotFound,
                AttendeeQueryError::DatabaseError(msg) => ListEventAttendeesError::QueryError(msg),
            })
    }
}
