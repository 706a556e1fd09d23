use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::attendee::application::domain::UserAttendance;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ListUserAttendancesError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait ListUserAttendancesUseCase: Send + Sync {
    /// Events the user is registered for, newest registration first.
    /// Deleted events are left out.
    async fn execute(&self, user_id: UserId)
        -> Result<Vec<UserAttendance>, ListUserAttendancesError>;
}
