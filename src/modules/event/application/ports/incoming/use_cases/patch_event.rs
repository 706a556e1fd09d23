use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::event::application::domain::validation::{self, EventFieldError};
use crate::modules::event::application::domain::{EditDenied, Event};
use crate::modules::event::application::ports::outgoing::{PatchEventData, PatchField};

//
// ──────────────────────────────────────────────────────────
// Command
// ──────────────────────────────────────────────────────────
//

/// Validated partial update. Omitted fields stay untouched.
#[derive(Debug, Clone)]
pub struct PatchEventCommand {
    data: PatchEventData,
}

impl PatchEventCommand {
    pub fn new(
        title: PatchField<String>,
        description: PatchField<String>,
        location: PatchField<String>,
        city: PatchField<String>,
        date: PatchField<String>,
        start_time: PatchField<String>,
        end_time: PatchField<String>,
    ) -> Result<Self, EventFieldError> {
        let description = match description {
            PatchField::Unset => PatchField::Unset,
            PatchField::Null => PatchField::Null,
            PatchField::Value(d) => match validation::description(Some(d)) {
                Some(d) => PatchField::Value(d),
                None => PatchField::Null,
            },
        };

        Ok(Self {
            data: PatchEventData {
                title: required(title, validation::title, EventFieldError::EmptyTitle)?,
                description,
                location: required(location, validation::location, EventFieldError::EmptyLocation)?,
                city: required(city, validation::city, EventFieldError::EmptyCity)?,
                date: required(date, validation::date, EventFieldError::InvalidDate)?,
                start_time: required(
                    start_time,
                    validation::start_time,
                    EventFieldError::InvalidStartTime,
                )?,
                end_time: required(end_time, validation::end_time, EventFieldError::InvalidEndTime)?,
            },
        })
    }

    pub fn data(&self) -> &PatchEventData {
        &self.data
    }

    pub fn into_data(self) -> PatchEventData {
        self.data
    }
}

/// Non-nullable column: `null` is reported as the field's validation error.
fn required<T>(
    field: PatchField<String>,
    validate: impl Fn(&str) -> Result<T, EventFieldError>,
    on_null: EventFieldError,
) -> Result<PatchField<T>, EventFieldError> {
    match field {
        PatchField::Unset => Ok(PatchField::Unset),
        PatchField::Null => Err(on_null),
        PatchField::Value(v) => validate(v.as_str()).map(PatchField::Value),
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PatchEventError {
    #[error("Event not found")]
    NotFound,

    #[error("Authentication required")]
    Unauthorized,

    #[error("Only the event creator may modify this event")]
    Forbidden,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<EditDenied> for PatchEventError {
    fn from(denied: EditDenied) -> Self {
        match denied {
            EditDenied::Unauthorized => PatchEventError::Unauthorized,
            EditDenied::Forbidden => PatchEventError::Forbidden,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Use case
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait PatchEventUseCase: Send + Sync {
    async fn execute(
        &self,
        requester: Option<UserId>,
        event_id: Uuid,
        command: PatchEventCommand,
    ) -> Result<Event, PatchEventError>;
}
