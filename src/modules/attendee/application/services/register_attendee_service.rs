use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::attendee::application::domain::RegisteredAttendance;
use crate::modules::attendee::application::ports::incoming::use_cases::{
    RegisterAttendeeError, RegisterAttendeeUseCase,
};
use crate::modules::attendee::application::ports::outgoing::{
    AttendeeRepository, AttendeeRepositoryError,
};

pub struct RegisterAttendeeService<R>
where
    R: AttendeeRepository,
{
    repository: R,
}

impl<R> RegisterAttendeeService<R>
where
    R: AttendeeRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> RegisterAttendeeUseCase for RegisterAttendeeService<R>
where
    R: AttendeeRepository + Send + Sync,
{
    async fn execute(
        &self,
        event_id: Uuid,
        user_id: UserId,
    ) -> Result<RegisteredAttendance, RegisterAttendeeError> {
        let registered = self
            .repository
            .register(event_id, user_id)
            .await
            .map_err(|e| match e {
                AttendeeRepositoryError::EventNotFound => RegisterAttendeeError::EventNotFound,
                AttendeeRepositoryError::UserNotFound => RegisterAttendeeError::UserNotFound,
                AttendeeRepositoryError::AlreadyRegistered => {
                    RegisterAttendeeError::AlreadyRegistered
                }
                AttendeeRepositoryError::DatabaseError(msg) => {
                    RegisterAttendeeError::RepositoryError(msg)
                }
            })?;

        info!(
            %event_id,
            %user_id,
            attendance_id = %registered.attendance.id,
            "Attendee registered"
        );

        Ok(registered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;

    use crate::modules::attendee::application::ports::outgoing::AttendeeQuery;
    use crate::modules::event::application::domain::EventStatus;
    use crate::tests::support::fixtures::{sample_event, sample_user};
    use crate::tests::support::in_memory::{InMemoryAttendees, InMemoryEvents, InMemoryUsers};

    mock! {
        pub Repo {}

        #[async_trait]
        impl AttendeeRepository for Repo {
            async fn register(
                &self,
                event_id: Uuid,
                user_id: UserId,
            ) -> Result<RegisteredAttendance, AttendeeRepositoryError>;
        }
    }

    #[tokio::test]
    async fn duplicate_registration_yields_one_success_then_conflict() {
        let user = sample_user("Ada", "ada@example.com");
        let event = sample_event("Launch", None);
        let attendees = InMemoryAttendees::new(
            InMemoryEvents::with_events(vec![event.clone()]),
            InMemoryUsers::with_users(vec![user.clone()]),
        );
        let svc = RegisterAttendeeService::new(attendees.clone());

        let first = svc.execute(event.id, user.id).await.unwrap();
        assert_eq!(first.event.title, "Launch");
        assert_eq!(first.user.email, "ada@example.com");

        assert_eq!(
            svc.execute(event.id, user.id).await.unwrap_err(),
            RegisterAttendeeError::AlreadyRegistered
        );
        assert_eq!(attendees.list_by_event(event.id).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn deleted_event_is_not_found_and_nothing_is_created() {
        let user = sample_user("Ada", "ada@example.com");
        let mut event = sample_event("Launch", None);
        event.status = EventStatus::Deleted;
        let attendees = InMemoryAttendees::new(
            InMemoryEvents::with_events(vec![event.clone()]),
            InMemoryUsers::with_users(vec![user.clone()]),
        );
        let svc = RegisterAttendeeService::new(attendees.clone());

        assert_eq!(
            svc.execute(event.id, user.id).await.unwrap_err(),
            RegisterAttendeeError::EventNotFound
        );
        assert!(attendees.list_by_user(user.id).await.unwrap().is_empty());
        assert_eq!(attendees.count(), 0);
    }

    #[tokio::test]
    async fn missing_event_wins_over_missing_user() {
        let attendees =
            InMemoryAttendees::new(InMemoryEvents::default(), InMemoryUsers::default());
        let svc = RegisterAttendeeService::new(attendees);

        assert_eq!(
            svc.execute(Uuid::new_v4(), UserId::from(Uuid::new_v4()))
                .await
                .unwrap_err(),
            RegisterAttendeeError::EventNotFound
        );
    }

    #[tokio::test]
    async fn unknown_user_is_not_found() {
        let event = sample_event("Launch", None);
        let attendees = InMemoryAttendees::new(
            InMemoryEvents::with_events(vec![event.clone()]),
            InMemoryUsers::default(),
        );
        let svc = RegisterAttendeeService::new(attendees);

        assert_eq!(
            svc.execute(event.id, UserId::from(Uuid::new_v4()))
                .await
                .unwrap_err(),
            RegisterAttendeeError::UserNotFound
        );
    }

    #[tokio::test]
    async fn database_error_is_mapped() {
        let mut repo = MockRepo::new();
        repo.expect_register()
            .times(1)
            .returning(|_, _| Err(AttendeeRepositoryError::DatabaseError("boom".to_string())));

        let svc = RegisterAttendeeService::new(repo);

        assert_eq!(
            svc.execute(Uuid::new_v4(), UserId::from(Uuid::new_v4()))
                .await
                .unwrap_err(),
            RegisterAttendeeError::RepositoryError("boom".to_string())
        );
    }
}
