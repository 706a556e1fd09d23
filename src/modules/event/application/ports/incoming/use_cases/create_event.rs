use async_trait::async_trait;
use chrono::NaiveDate;

use crate::auth::application::domain::entities::UserId;
use crate::modules::event::application::domain::validation::{self, EventFieldError};
use crate::modules::event::application::domain::{EditDenied, Event};

//
// ──────────────────────────────────────────────────────────
// Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateEventCommand {
    title: String,
    description: Option<String>,
    location: String,
    city: String,
    date: NaiveDate,
    start_time: String,
    end_time: String,
}

impl CreateEventCommand {
    pub fn new(
        title: &str,
        description: Option<String>,
        location: &str,
        city: &str,
        date: &str,
        start_time: &str,
        end_time: &str,
    ) -> Result<Self, EventFieldError> {
        Ok(Self {
            title: validation::title(title)?,
            description: validation::description(description),
            location: validation::location(location)?,
            city: validation::city(city)?,
            date: validation::date(date)?,
            start_time: validation::start_time(start_time)?,
            end_time: validation::end_time(end_time)?,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn start_time(&self) -> &str {
        &self.start_time
    }

    pub fn end_time(&self) -> &str {
        &self.end_time
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CreateEventError {
    #[error("Authentication required")]
    Unauthorized,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<EditDenied> for CreateEventError {
    fn from(_: EditDenied) -> Self {
        CreateEventError::Unauthorized
    }
}

//
// ──────────────────────────────────────────────────────────
// Use case
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateEventUseCase: Send + Sync {
    async fn execute(
        &self,
        requester: Option<UserId>,
        command: CreateEventCommand,
    ) -> Result<Event, CreateEventError>;
}
