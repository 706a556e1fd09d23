use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::attendee::application::ports::incoming::use_cases::{
    RegisterAttendeeError, RegisterAttendeeUseCase,
};
use crate::modules::attendee::application::AttendeeUseCases;
use crate::modules::event::application::ports::incoming::use_cases::{
    GetActiveEventError, GetActiveEventUseCase,
};
use crate::modules::event::application::EventUseCases;
use crate::modules::scanner::application::domain::{ScanReceipt, ScannedEvent};
use crate::modules::scanner::application::ports::outgoing::{GatewayError, ScanGateway};

/// Scan gateway backed by the in-process event and attendee use cases.
///
/// Ids that are not UUIDs cannot name a stored record and resolve to the
/// matching not-found error.
#[derive(Clone)]
pub struct UseCaseScanGateway {
    events: Arc<dyn GetActiveEventUseCase + Send + Sync>,
    registry: Arc<dyn RegisterAttendeeUseCase + Send + Sync>,
}

impl UseCaseScanGateway {
    pub fn new(
        events: Arc<dyn GetActiveEventUseCase + Send + Sync>,
        registry: Arc<dyn RegisterAttendeeUseCase + Send + Sync>,
    ) -> Self {
        Self { events, registry }
    }

    pub fn from_use_cases(events: &EventUseCases, attendees: &AttendeeUseCases) -> Self {
        Self::new(events.get_active.clone(), attendees.register.clone())
    }
}

#[async_trait]
impl ScanGateway for UseCaseScanGateway {
    async fn find_event(&self, event_id: &str) -> Result<ScannedEvent, GatewayError> {
        let id = Uuid::parse_str(event_id).map_err(|_| GatewayError::EventNotFound)?;

        let event = self.events.execute(id).await.map_err(|e| match e {
            GetActiveEventError::NotFound => GatewayError::EventNotFound,
            GetActiveEventError::QueryError(msg) => GatewayError::Unavailable(msg),
        })?;

        Ok(ScannedEvent {
            id: event.id.to_string(),
            title: event.title,
            date: event.date,
            location: event.location,
            city: event.city,
        })
    }

    async fn register(&self, event_id: &str, user_id: &str) -> Result<ScanReceipt, GatewayError> {
        let event_id = Uuid::parse_str(event_id).map_err(|_| GatewayError::EventNotFound)?;
        let user_id = Uuid::parse_str(user_id).map_err(|_| GatewayError::UserNotFound)?;

        let registered = self
            .registry
            .execute(event_id, UserId::from(user_id))
            .await
            .map_err(|e| match e {
                RegisterAttendeeError::EventNotFound => GatewayError::EventNotFound,
                RegisterAttendeeError::UserNotFound => GatewayError::UserNotFound,
                RegisterAttendeeError::AlreadyRegistered => GatewayError::AlreadyRegistered,
                RegisterAttendeeError::RepositoryError(msg) => GatewayError::Unavailable(msg),
            })?;

        Ok(ScanReceipt {
            attendance_id: registered.attendance.id.to_string(),
            event_id: registered.event.id.to_string(),
            event_title: registered.event.title,
            user_id: registered.user.id.to_string(),
            user_name: registered.user.name,
            registered_at: registered.attendance.created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::time::Duration;

    use crate::modules::attendee::application::ports::outgoing::AttendeeQuery;
    use crate::modules::attendee::application::services::RegisterAttendeeService;
    use crate::modules::event::application::domain::EventStatus;
    use crate::modules::event::application::services::GetActiveEventService;
    use crate::modules::scanner::application::domain::ScanState;
    use crate::modules::scanner::application::ports::outgoing::{
        Camera, CaptureError, CaptureSession,
    };
    use crate::modules::scanner::application::services::{ScanConfig, ScanOrchestrator};
    use crate::qr;
    use crate::tests::support::fixtures::{sample_event, sample_user};
    use crate::tests::support::in_memory::{InMemoryAttendees, InMemoryEvents, InMemoryUsers};

    fn gateway(events: InMemoryEvents, attendees: InMemoryAttendees) -> UseCaseScanGateway {
        UseCaseScanGateway::new(
            Arc::new(GetActiveEventService::new(events)),
            Arc::new(RegisterAttendeeService::new(attendees)),
        )
    }

    #[tokio::test]
    async fn resolves_active_event() {
        let event = sample_event("Launch", None);
        let events = InMemoryEvents::with_events(vec![event.clone()]);
        let attendees = InMemoryAttendees::new(events.clone(), InMemoryUsers::default());

        let found = gateway(events, attendees)
            .find_event(&event.id.to_string())
            .await
            .unwrap();

        assert_eq!(found.title, "Launch");
        assert_eq!(found.city, event.city);
    }

    #[tokio::test]
    async fn deleted_or_malformed_event_is_not_found() {
        let mut event = sample_event("Launch", None);
        event.status = EventStatus::Deleted;
        let events = InMemoryEvents::with_events(vec![event.clone()]);
        let attendees = InMemoryAttendees::new(events.clone(), InMemoryUsers::default());
        let gateway = gateway(events, attendees);

        assert_eq!(
            gateway.find_event(&event.id.to_string()).await.unwrap_err(),
            GatewayError::EventNotFound
        );
        assert_eq!(
            gateway.find_event("E").await.unwrap_err(),
            GatewayError::EventNotFound
        );
    }

    #[tokio::test]
    async fn malformed_user_id_is_user_not_found() {
        let event = sample_event("Launch", None);
        let events = InMemoryEvents::with_events(vec![event.clone()]);
        let attendees = InMemoryAttendees::new(events.clone(), InMemoryUsers::default());

        assert_eq!(
            gateway(events, attendees)
                .register(&event.id.to_string(), "u1")
                .await
                .unwrap_err(),
            GatewayError::UserNotFound
        );
    }

    #[tokio::test]
    async fn duplicate_registration_is_already_registered() {
        let ada = sample_user("Ada", "ada@example.com");
        let event = sample_event("Launch", None);
        let events = InMemoryEvents::with_events(vec![event.clone()]);
        let attendees =
            InMemoryAttendees::new(events.clone(), InMemoryUsers::with_users(vec![ada.clone()]));
        let gateway = gateway(events, attendees);

        let receipt = gateway
            .register(&event.id.to_string(), &ada.id.to_string())
            .await
            .unwrap();
        assert_eq!(receipt.user_name, "Ada");
        assert_eq!(receipt.event_title, "Launch");

        assert_eq!(
            gateway
                .register(&event.id.to_string(), &ada.id.to_string())
                .await
                .unwrap_err(),
            GatewayError::AlreadyRegistered
        );
    }

    // ──── End to end through the orchestrator ────

    struct PassCamera {
        frames: Mutex<VecDeque<String>>,
    }

    struct OneFrame(Option<String>);

    #[async_trait]
    impl CaptureSession for OneFrame {
        async fn next_frame(&mut self) -> Option<String> {
            self.0.take()
        }

        fn stop(&mut self) {}
    }

    #[async_trait]
    impl Camera for PassCamera {
        async fn acquire(&self) -> Result<Box<dyn CaptureSession>, CaptureError> {
            let frame = self.frames.lock().unwrap().pop_front();
            Ok(Box::new(OneFrame(frame)))
        }
    }

    #[tokio::test]
    async fn scanned_pass_registers_through_use_cases() {
        let ada = sample_user("Ada", "ada@example.com");
        let event = sample_event("Launch", None);
        let events = InMemoryEvents::with_events(vec![event.clone()]);
        let attendees =
            InMemoryAttendees::new(events.clone(), InMemoryUsers::with_users(vec![ada.clone()]));

        let pass = qr::encode(&ada.id.to_string(), &event.id.to_string());
        let camera = PassCamera {
            frames: Mutex::new(VecDeque::from(vec![pass.clone(), pass])),
        };
        let mut scanner = ScanOrchestrator::new(
            camera,
            gateway(events, attendees.clone()),
            ScanConfig {
                retry_backoff: Duration::ZERO,
                success_delay: Duration::ZERO,
            },
        );

        scanner.start().await;
        scanner.scan_next().await;
        assert!(scanner.confirm().await.is_some());

        scanner.start().await;
        scanner.scan_next().await;
        assert!(scanner.confirm().await.is_none());
        assert_eq!(scanner.state(), &ScanState::Scanning);

        let listed = attendees.list_by_event(event.id).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].user.id, ada.id);
    }
}
