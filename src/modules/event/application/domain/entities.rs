use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Active,
    Deleted,
}

impl EventStatus {
    pub fn from_deleted_flag(is_deleted: bool) -> Self {
        if is_deleted {
            Self::Deleted
        } else {
            Self::Active
        }
    }

    pub fn is_deleted(self) -> bool {
        matches!(self, Self::Deleted)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub location: String,
    pub city: String,
    pub date: NaiveDate,
    /// `HH:mm`, 24-hour
    pub start_time: String,
    /// `HH:mm`, 24-hour
    pub end_time: String,
    /// `None` means the default creator (no-auth bootstrap mode)
    pub created_by: Option<UserId>,
    /// PNG data URL of the event link
    pub qr_image: Option<String>,
    pub status: EventStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Event {
    pub fn is_active(&self) -> bool {
        self.status == EventStatus::Active
    }
}
