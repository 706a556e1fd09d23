use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::incoming::use_cases::{
    LoginResult, LoginUserCommand, LoginUserError, LoginUserUseCase, RegisterUserCommand,
    RegisterUserError, RegisterUserUseCase, RegisteredUser,
};
use crate::auth::application::ports::outgoing::token_provider::ACCESS_TOKEN_TYPE;
use crate::auth::application::ports::outgoing::{TokenClaims, TokenError, TokenProvider};
use crate::modules::attendee::application::domain::{
    EventAttendee, RegisteredAttendance, UserAttendance,
};
use crate::modules::attendee::application::ports::incoming::use_cases::{
    ListEventAttendeesError, ListEventAttendeesUseCase, ListUserAttendancesError,
    ListUserAttendancesUseCase, RegisterAttendeeError, RegisterAttendeeUseCase,
};
use crate::modules::event::application::domain::Event;
use crate::modules::event::application::ports::incoming::use_cases::{
    AttendeePass, CreateEventCommand, CreateEventError, CreateEventUseCase, GetActiveEventError,
    GetActiveEventUseCase, IssueAttendeePassError, IssueAttendeePassUseCase, ListEventsError,
    ListEventsUseCase, PatchEventCommand, PatchEventError, PatchEventUseCase, RestoreEventError,
    RestoreEventUseCase, SoftDeleteEventError, SoftDeleteEventUseCase,
};
use crate::qr::application::ports::outgoing::{QrRenderError, QrRenderer};

// ──── Token provider ────

/// Accepts any token as an access token for a fixed user, or rejects all.
pub struct StubTokenProvider {
    user_id: Option<Uuid>,
}

impl StubTokenProvider {
    pub fn valid(user_id: Uuid) -> Self {
        Self {
            user_id: Some(user_id),
        }
    }

    pub fn rejecting() -> Self {
        Self { user_id: None }
    }
}

impl TokenProvider for StubTokenProvider {
    fn generate_access_token(&self, user_id: Uuid) -> Result<String, TokenError> {
        Ok(format!("token-{}", user_id))
    }

    fn verify_token(&self, _token: &str) -> Result<TokenClaims, TokenError> {
        let sub = self.user_id.ok_or(TokenError::InvalidSignature)?;
        let now = Utc::now().timestamp();

        Ok(TokenClaims {
            sub,
            exp: now + 3600,
            iat: now,
            nbf: now,
            iss: "test".to_string(),
            token_type: ACCESS_TOKEN_TYPE.to_string(),
        })
    }

    fn access_token_ttl(&self) -> i64 {
        3600
    }
}

// ──── QR renderer ────

/// Renders every text to the same tiny "PNG" and records what it was asked for.
#[derive(Clone)]
pub struct StubQrRenderer {
    fail: bool,
    rendered: Arc<Mutex<Vec<String>>>,
}

impl StubQrRenderer {
    pub const PNG: &'static [u8] = b"png";
    /// `to_data_url(PNG)`
    pub const DATA_URL: &'static str = "data:image/png;base64,cG5n";

    pub fn ok() -> Self {
        Self {
            fail: false,
            rendered: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::ok()
        }
    }

    pub fn rendered(&self) -> Vec<String> {
        self.rendered.lock().unwrap().clone()
    }
}

#[async_trait]
impl QrRenderer for StubQrRenderer {
    async fn render_png(&self, text: &str) -> Result<Vec<u8>, QrRenderError> {
        if self.fail {
            return Err(QrRenderError::EncodingFailed("data too long".to_string()));
        }
        self.rendered.lock().unwrap().push(text.to_string());
        Ok(Self::PNG.to_vec())
    }
}

// ──── Auth use cases ────

#[derive(Default, Clone)]
pub struct StubRegisterUserUseCase;

#[async_trait]
impl RegisterUserUseCase for StubRegisterUserUseCase {
    async fn execute(
        &self,
        _command: RegisterUserCommand,
    ) -> Result<RegisteredUser, RegisterUserError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubLoginUserUseCase;

#[async_trait]
impl LoginUserUseCase for StubLoginUserUseCase {
    async fn execute(&self, _command: LoginUserCommand) -> Result<LoginResult, LoginUserError> {
        unimplemented!("Not used in this test")
    }
}

// ──── Event use cases ────

#[derive(Default, Clone)]
pub struct StubCreateEventUseCase;

#[async_trait]
impl CreateEventUseCase for StubCreateEventUseCase {
    async fn execute(
        &self,
        _requester: Option<UserId>,
        _command: CreateEventCommand,
    ) -> Result<Event, CreateEventError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetActiveEventUseCase;

#[async_trait]
impl GetActiveEventUseCase for StubGetActiveEventUseCase {
    async fn execute(&self, _event_id: Uuid) -> Result<Event, GetActiveEventError> {
        Err(GetActiveEventError::NotFound)
    }
}

#[derive(Default, Clone)]
pub struct StubListEventsUseCase;

#[async_trait]
impl ListEventsUseCase for StubListEventsUseCase {
    async fn execute(&self) -> Result<Vec<Event>, ListEventsError> {
        Ok(vec![])
    }
}

#[derive(Default, Clone)]
pub struct StubPatchEventUseCase;

#[async_trait]
impl PatchEventUseCase for StubPatchEventUseCase {
    async fn execute(
        &self,
        _requester: Option<UserId>,
        _event_id: Uuid,
        _command: PatchEventCommand,
    ) -> Result<Event, PatchEventError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubSoftDeleteEventUseCase;

#[async_trait]
impl SoftDeleteEventUseCase for StubSoftDeleteEventUseCase {
    async fn execute(
        &self,
        _requester: Option<UserId>,
        _event_id: Uuid,
    ) -> Result<(), SoftDeleteEventError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubRestoreEventUseCase;

#[async_trait]
impl RestoreEventUseCase for StubRestoreEventUseCase {
    async fn execute(
        &self,
        _requester: Option<UserId>,
        _event_id: Uuid,
    ) -> Result<Event, RestoreEventError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubIssueAttendeePassUseCase;

#[async_trait]
impl IssueAttendeePassUseCase for StubIssueAttendeePassUseCase {
    async fn execute(
        &self,
        _requester: UserId,
        _event_id: Uuid,
        _holder: Option<UserId>,
    ) -> Result<AttendeePass, IssueAttendeePassError> {
        unimplemented!("Not used in this test")
    }
}

// ──── Attendee use cases ────

#[derive(Default, Clone)]
pub struct StubRegisterAttendeeUseCase;

#[async_trait]
impl RegisterAttendeeUseCase for StubRegisterAttendeeUseCase {
    async fn execute(
        &self,
        _event_id: Uuid,
        _user_id: UserId,
    ) -> Result<RegisteredAttendance, RegisterAttendeeError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubListEventAttendeesUseCase;

#[async_trait]
impl ListEventAttendeesUseCase for StubListEventAttendeesUseCase {
    async fn execute(
        &self,
        _event_id: Uuid,
    ) -> Result<Vec<EventAttendee>, ListEventAttendeesError> {
        Ok(vec![])
    }
}

#[derive(Default, Clone)]
pub struct StubListUserAttendancesUseCase;

#[async_trait]
impl ListUserAttendancesUseCase for StubListUserAttendancesUseCase {
    async fn execute(
        &self,
        _user_id: UserId,
    ) -> Result<Vec<UserAttendance>, ListUserAttendancesError> {
        Ok(vec![])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qr::application::ports::outgoing::qr_renderer::to_data_url;

    #[test]
    fn data_url_matches_png_bytes() {
        assert_eq!(to_data_url(StubQrRenderer::PNG), StubQrRenderer::DATA_URL);
    }
}
