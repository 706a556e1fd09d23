use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::auth::application::domain::entities::{User, UserId};
use crate::modules::event::application::domain::{Event, EventStatus};
use crate::tests::support::stubs::StubQrRenderer;

/// Active event on 2025-03-01, 09:00 to 11:00, at Hall A, Jakarta.
pub fn sample_event(title: &str, created_by: Option<UserId>) -> Event {
    let now = Utc::now();
    Event {
        id: Uuid::new_v4(),
        title: title.to_string(),
        description: Some("Product launch".to_string()),
        location: "Hall A".to_string(),
        city: "Jakarta".to_string(),
        date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
        start_time: "09:00".to_string(),
        end_time: "11:00".to_string(),
        created_by,
        qr_image: Some(StubQrRenderer::DATA_URL.to_string()),
        status: EventStatus::Active,
        created_at: now,
        updated_at: now,
    }
}

pub fn sample_user(name: &str, email: &str) -> User {
    let now = Utc::now();
    User {
        id: UserId::from(Uuid::new_v4()),
        name: name.to_string(),
        email: email.to_string(),
        password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
        created_at: now,
        updated_at: now,
    }
}
