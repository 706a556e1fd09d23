use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::attendee::application::domain::UserAttendance;
use crate::modules::attendee::application::ports::incoming::use_cases::{
    ListUserAttendancesError, ListUserAttendancesUseCase,
};
use crate::modules::attendee::application::ports::outgoing::{AttendeeQuery, AttendeeQueryError};

pub struct ListUserAttendancesService<Q>
where
    Q: AttendeeQuery,
{
    query: Q,
}

impl<Q> ListUserAttendancesService<Q>
where
    Q: AttendeeQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListUserAttendancesUseCase for ListUserAttendancesService<Q>
where
    Q: AttendeeQuery + Send + Sync,
{
    async fn execute(
        &self,
        user_id: UserId,
    ) -> Result<Vec<UserAttendance>, ListUserAttendancesError> {
        self.query.list_by_user(user_id).await.map_err(|e| match e {
            AttendeeQueryError::DatabaseError(msg) => ListUserAttendancesError::QueryError(msg),
            // not produced by list_by_user
            AttendeeQueryError::EventNotFound => {
                ListUserAttendancesError::QueryError("unexpected event lookup".to_string())
            }
        })
    }
}
