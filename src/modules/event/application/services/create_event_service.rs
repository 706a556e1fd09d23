use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::event::application::domain::{EditPolicy, Event};
use crate::modules::event::application::ports::incoming::use_cases::{
    CreateEventCommand, CreateEventError, CreateEventUseCase,
};
use crate::modules::event::application::ports::outgoing::{
    CreateEventData, EventRepository, EventRepositoryError,
};
use crate::qr::application::ports::outgoing::QrRenderer;

pub struct CreateEventService<R>
where
    R: EventRepository,
{
    repository: R,
    renderer: Arc<dyn QrRenderer + Send + Sync>,
    policy: EditPolicy,
    app_url: String,
}

impl<R> CreateEventService<R>
where
    R: EventRepository,
{
    pub fn new(
        repository: R,
        renderer: Arc<dyn QrRenderer + Send + Sync>,
        policy: EditPolicy,
        app_url: impl Into<String>,
    ) -> Self {
        Self {
            repository,
            renderer,
            policy,
            app_url: app_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Public page URL encoded in the event's QR image.
    pub fn event_url(&self, event_id: Uuid) -> String {
        format!("{}/event/{}", self.app_url, event_id)
    }
}

#[async_trait]
impl<R> CreateEventUseCase for CreateEventService<R>
where
    R: EventRepository + Send + Sync,
{
    async fn execute(
        &self,
        requester: Option<UserId>,
        command: CreateEventCommand,
    ) -> Result<Event, CreateEventError> {
        self.policy.authorize_create(requester)?;

        let event_id = Uuid::new_v4();

        let qr_image = match self.renderer.render_data_url(&self.event_url(event_id)).await {
            Ok(url) => Some(url),
            Err(e) => {
                warn!(%event_id, error = %e, "QR rendering failed, saving event without image");
                None
            }
        };

        let data = CreateEventData {
            id: event_id,
            title: command.title().to_string(),
            description: command.description().map(str::to_string),
            location: command.location().to_string(),
            city: command.city().to_string(),
            date: command.date(),
            start_time: command.start_time().to_string(),
            end_time: command.end_time().to_string(),
            created_by: requester,
            qr_image,
        };

        let event = self
            .repository
            .create_event(data)
            .await
            .map_err(|e| match e {
                EventRepositoryError::DatabaseError(msg) => CreateEventError::RepositoryError(msg),
                EventRepositoryError::NotFound => CreateEventError::RepositoryError(
                    "event vanished while being created".to_string(),
                ),
            })?;

        info!(event_id = %event.id, created_by = ?event.created_by, "Event created");

        Ok(event)
    }
}
