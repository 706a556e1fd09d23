use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::event::application::domain::Event;

//
// ──────────────────────────────────────────────────────────
// PatchField (explicit PATCH semantics)
// ──────────────────────────────────────────────────────────
// - Unset: field not provided => keep DB value
// - Null: explicitly null => clear the column (nullable fields only)
// - Value(v): replace with v
//
// Omitted fields deserialize to Unset through #[serde(default)].
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum PatchField<T> {
    #[default]
    #[serde(skip)]
    Unset,
    Null,
    Value(T),
}

impl<T> PatchField<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, PatchField::Unset)
    }

    pub fn as_value(&self) -> Option<&T> {
        if let PatchField::Value(v) = self {
            Some(v)
        } else {
            None
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> PatchField<U> {
        match self {
            PatchField::Unset => PatchField::Unset,
            PatchField::Null => PatchField::Null,
            PatchField::Value(v) => PatchField::Value(f(v)),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateEventData {
    /// Generated before insert so the QR image can embed the event URL
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub location: String,
    pub city: String,
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub created_by: Option<UserId>,
    pub qr_image: Option<String>,
}

/// Only `description` accepts `Null`; the other fields are Unset or Value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatchEventData {
    pub title: PatchField<String>,
    pub description: PatchField<String>,
    pub location: PatchField<String>,
    pub city: PatchField<String>,
    pub date: PatchField<NaiveDate>,
    pub start_time: PatchField<String>,
    pub end_time: PatchField<String>,
}

impl PatchEventData {
    pub fn is_empty(&self) -> bool {
        self.title.is_unset()
            && self.description.is_unset()
            && self.location.is_unset()
            && self.city.is_unset()
            && self.date.is_unset()
            && self.start_time.is_unset()
            && self.end_time.is_unset()
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EventRepositoryError {
    #[error("Event not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn create_event(&self, data: CreateEventData) -> Result<Event, EventRepositoryError>;

    /// Applies the patch to an active event.
    async fn patch_event(
        &self,
        event_id: Uuid,
        data: PatchEventData,
    ) -> Result<Event, EventRepositoryError>;

    /// Flags an active event as deleted.
    async fn soft_delete_event(&self, event_id: Uuid) -> Result<(), EventRepositoryError>;

    /// Clears the deletion flag.
    async fn restore_event(&self, event_id: Uuid) -> Result<Event, EventRepositoryError>;
}
