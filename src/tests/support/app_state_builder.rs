use std::sync::Arc;

use actix_web::web;

use crate::auth::application::ports::incoming::use_cases::{LoginUserUseCase, RegisterUserUseCase};
use crate::auth::application::AuthUseCases;
use crate::modules::attendee::application::ports::incoming::use_cases::{
    ListEventAttendeesUseCase, ListUserAttendancesUseCase, RegisterAttendeeUseCase,
};
use crate::modules::attendee::application::AttendeeUseCases;
use crate::modules::event::application::ports::incoming::use_cases::{
    CreateEventUseCase, GetActiveEventUseCase, IssueAttendeePassUseCase, ListEventsUseCase,
    PatchEventUseCase, RestoreEventUseCase, SoftDeleteEventUseCase,
};
use crate::modules::event::application::EventUseCases;
use crate::tests::support::stubs::*;
use crate::AppState;

/// `AppState` for route tests. Every use case starts as a stub; tests swap in
/// the one the route under test calls.
pub struct TestAppStateBuilder {
    auth: AuthUseCases,
    event: EventUseCases,
    attendee: AttendeeUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            auth: AuthUseCases {
                register: Arc::new(StubRegisterUserUseCase),
                login: Arc::new(StubLoginUserUseCase),
            },
            event: EventUseCases {
                create: Arc::new(StubCreateEventUseCase),
                get_active: Arc::new(StubGetActiveEventUseCase),
                list: Arc::new(StubListEventsUseCase),
                patch: Arc::new(StubPatchEventUseCase),
                soft_delete: Arc::new(StubSoftDeleteEventUseCase),
                restore: Arc::new(StubRestoreEventUseCase),
                issue_pass: Arc::new(StubIssueAttendeePassUseCase),
            },
            attendee: AttendeeUseCases {
                register: Arc::new(StubRegisterAttendeeUseCase),
                list_by_event: Arc::new(StubListEventAttendeesUseCase),
                list_by_user: Arc::new(StubListUserAttendancesUseCase),
            },
        }
    }
}

impl TestAppStateBuilder {
    // ──── Auth ────

    pub fn with_register_user(
        mut self,
        uc: impl RegisterUserUseCase + Send + Sync + 'static,
    ) -> Self {
        self.auth.register = Arc::new(uc);
        self
    }

    pub fn with_login_user(mut self, uc: impl LoginUserUseCase + Send + Sync + 'static) -> Self {
        self.auth.login = Arc::new(uc);
        self
    }

    // ──── Events ────

    pub fn with_create_event(
        mut self,
        uc: impl CreateEventUseCase + Send + Sync + 'static,
    ) -> Self {
        self.event.create = Arc::new(uc);
        self
    }

    pub fn with_get_active_event(
        mut self,
        uc: impl GetActiveEventUseCase + Send + Sync + 'static,
    ) -> Self {
        self.event.get_active = Arc::new(uc);
        self
    }

    pub fn with_list_events(mut self, uc: impl ListEventsUseCase + Send + Sync + 'static) -> Self {
        self.event.list = Arc::new(uc);
        self
    }

    pub fn with_patch_event(mut self, uc: impl PatchEventUseCase + Send + Sync + 'static) -> Self {
        self.event.patch = Arc::new(uc);
        self
    }

    pub fn with_soft_delete_event(
        mut self,
        uc: impl SoftDeleteEventUseCase + Send + Sync + 'static,
    ) -> Self {
        self.event.soft_delete = Arc::new(uc);
        self
    }

    pub fn with_restore_event(
        mut self,
        uc: impl RestoreEventUseCase + Send + Sync + 'static,
    ) -> Self {
        self.event.restore = Arc::new(uc);
        self
    }

    pub fn with_issue_pass(
        mut self,
        uc: impl IssueAttendeePassUseCase + Send + Sync + 'static,
    ) -> Self {
        self.event.issue_pass = Arc::new(uc);
        self
    }

    // ──── Attendees ────

    pub fn with_register_attendee(
        mut self,
        uc: impl RegisterAttendeeUseCase + Send + Sync + 'static,
    ) -> Self {
        self.attendee.register = Arc::new(uc);
        self
    }

    pub fn with_list_event_attendees(
        mut self,
        uc: impl ListEventAttendeesUseCase + Send + Sync + 'static,
    ) -> Self {
        self.attendee.list_by_event = Arc::new(uc);
        self
    }

    pub fn with_list_user_attendances(
        mut self,
        uc: impl ListUserAttendancesUseCase + Send + Sync + 'static,
    ) -> Self {
        self.attendee.list_by_user = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            auth: self.auth,
            event: self.event,
            attendee: self.attendee,
        })
    }
}
