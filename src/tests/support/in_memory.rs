//! In-memory port implementations for service tests.
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::auth::application::domain::entities::{User, UserId};
use crate::auth::application::ports::outgoing::{UserQuery, UserQueryError};
use crate::modules::attendee::application::domain::{
    Attendance, EventAttendee, EventDetails, EventSummary, RegisteredAttendance, UserAttendance,
    UserSummary,
};
use crate::modules::attendee::application::ports::outgoing::{
    AttendeeQuery, AttendeeQueryError, AttendeeRepository, AttendeeRepositoryError,
};
use crate::modules::event::application::domain::{Event, EventStatus};
use crate::modules::event::application::ports::outgoing::{
    CreateEventData, EventQuery, EventQueryError, EventRepository, EventRepositoryError,
    PatchEventData, PatchField,
};

// ──── Events ────

#[derive(Default)]
struct EventStore {
    events: Vec<Event>,
    failing: bool,
}

/// Implements both event ports over one shared store; clones see the same data.
#[derive(Clone, Default)]
pub struct InMemoryEvents {
    store: Arc<Mutex<EventStore>>,
}

impl InMemoryEvents {
    pub fn with_events(events: Vec<Event>) -> Self {
        Self {
            store: Arc::new(Mutex::new(EventStore {
                events,
                failing: false,
            })),
        }
    }

    /// Every call fails with a database error
    pub fn failing() -> Self {
        Self {
            store: Arc::new(Mutex::new(EventStore {
                events: Vec::new(),
                failing: true,
            })),
        }
    }

    fn check(&self) -> Result<(), String> {
        if self.store.lock().unwrap().failing {
            Err("connection refused".to_string())
        } else {
            Ok(())
        }
    }

    fn get(&self, event_id: Uuid) -> Option<Event> {
        self.store
            .lock()
            .unwrap()
            .events
            .iter()
            .find(|e| e.id == event_id)
            .cloned()
    }

    fn get_active(&self, event_id: Uuid) -> Option<Event> {
        self.get(event_id).filter(Event::is_active)
    }

    fn update<F>(&self, event_id: Uuid, f: F) -> Option<Event>
    where
        F: FnOnce(&mut Event),
    {
        let mut store = self.store.lock().unwrap();
        let event = store.events.iter_mut().find(|e| e.id == event_id)?;
        f(event);
        event.updated_at = Utc::now();
        Some(event.clone())
    }
}

fn apply<T>(field: PatchField<T>, target: &mut T) {
    if let PatchField::Value(v) = field {
        *target = v;
    }
}

#[async_trait]
impl EventQuery for InMemoryEvents {
    async fn find_active(&self, event_id: Uuid) -> Result<Option<Event>, EventQueryError> {
        self.check().map_err(EventQueryError::DatabaseError)?;
        Ok(self.get_active(event_id))
    }

    async fn find_any(&self, event_id: Uuid) -> Result<Option<Event>, EventQueryError> {
        self.check().map_err(EventQueryError::DatabaseError)?;
        Ok(self.get(event_id))
    }

    async fn list_active(&self) -> Result<Vec<Event>, EventQueryError> {
        self.check().map_err(EventQueryError::DatabaseError)?;
        let mut events: Vec<Event> = self
            .store
            .lock()
            .unwrap()
            .events
            .iter()
            .filter(|e| e.is_active())
            .cloned()
            .collect();
        events.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(events)
    }
}

#[async_trait]
impl EventRepository for InMemoryEvents {
    async fn create_event(&self, data: CreateEventData) -> Result<Event, EventRepositoryError> {
        self.check().map_err(EventRepositoryError::DatabaseError)?;

        let now = Utc::now();
        let event = Event {
            id: data.id,
            title: data.title,
            description: data.description,
            location: data.location,
            city: data.city,
            date: data.date,
            start_time: data.start_time,
            end_time: data.end_time,
            created_by: data.created_by,
            qr_image: data.qr_image,
            status: EventStatus::Active,
            created_at: now,
            updated_at: now,
        };
        self.store.lock().unwrap().events.push(event.clone());
        Ok(event)
    }

    async fn patch_event(
        &self,
        event_id: Uuid,
        data: PatchEventData,
    ) -> Result<Event, EventRepositoryError> {
        self.check().map_err(EventRepositoryError::DatabaseError)?;
        self.get_active(event_id)
            .ok_or(EventRepositoryError::NotFound)?;

        self.update(event_id, |event| {
            apply(data.title, &mut event.title);
            match data.description {
                PatchField::Unset => {}
                PatchField::Null => event.description = None,
                PatchField::Value(v) => event.description = Some(v),
            }
            apply(data.location, &mut event.location);
            apply(data.city, &mut event.city);
            apply(data.date, &mut event.date);
            apply(data.start_time, &mut event.start_time);
            apply(data.end_time, &mut event.end_time);
        })
        .ok_or(EventRepositoryError::NotFound)
    }

    async fn soft_delete_event(&self, event_id: Uuid) -> Result<(), EventRepositoryError> {
        self.check().map_err(EventRepositoryError::DatabaseError)?;
        self.get_active(event_id)
            .ok_or(EventRepositoryError::NotFound)?;

        self.update(event_id, |event| event.status = EventStatus::Deleted)
            .map(|_| ())
            .ok_or(EventRepositoryError::NotFound)
    }

    async fn restore_event(&self, event_id: Uuid) -> Result<Event, EventRepositoryError> {
        self.check().map_err(EventRepositoryError::DatabaseError)?;
        self.update(event_id, |event| event.status = EventStatus::Active)
            .ok_or(EventRepositoryError::NotFound)
    }
}

// ──── Users ────

#[derive(Clone, Default)]
pub struct InMemoryUsers {
    users: Arc<Mutex<Vec<User>>>,
}

impl InMemoryUsers {
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: Arc::new(Mutex::new(users)),
        }
    }

    fn get(&self, user_id: UserId) -> Option<User> {
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == user_id)
            .cloned()
    }
}

#[async_trait]
impl UserQuery for InMemoryUsers {
    async fn find_by_id(&self, user_id: UserId) -> Result<Option<User>, UserQueryError> {
        Ok(self.get(user_id))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }
}

// ──── Attendances ────

/// Attendance store that resolves events and users through the other doubles.
///
/// Rows are kept in insertion order, so "newest first" is reverse insertion.
#[derive(Clone)]
pub struct InMemoryAttendees {
    events: InMemoryEvents,
    users: InMemoryUsers,
    rows: Arc<Mutex<Vec<Attendance>>>,
}

impl InMemoryAttendees {
    pub fn new(events: InMemoryEvents, users: InMemoryUsers) -> Self {
        Self {
            events,
            users,
            rows: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    fn newest_first(&self, keep: impl Fn(&Attendance) -> bool) -> Vec<Attendance> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .rev()
            .filter(|a| keep(a))
            .cloned()
            .collect()
    }
}

fn summary(user: &User) -> UserSummary {
    UserSummary {
        id: user.id,
        name: user.name.clone(),
        email: user.email.clone(),
    }
}

#[async_trait]
impl AttendeeRepository for InMemoryAttendees {
    async fn register(
        &self,
        event_id: Uuid,
        user_id: UserId,
    ) -> Result<RegisteredAttendance, AttendeeRepositoryError> {
        let event = self
            .events
            .get_active(event_id)
            .ok_or(AttendeeRepositoryError::EventNotFound)?;
        let user = self
            .users
            .get(user_id)
            .ok_or(AttendeeRepositoryError::UserNotFound)?;

        let mut rows = self.rows.lock().unwrap();
        if rows
            .iter()
            .any(|a| a.event_id == event_id && a.user_id == user_id)
        {
            return Err(AttendeeRepositoryError::AlreadyRegistered);
        }

        let attendance = Attendance {
            id: Uuid::new_v4(),
            event_id,
            user_id,
            created_at: Utc::now(),
        };
        rows.push(attendance.clone());

        Ok(RegisteredAttendance {
            attendance,
            event: EventSummary {
                id: event.id,
                title: event.title,
            },
            user: summary(&user),
        })
    }
}

#[async_trait]
impl AttendeeQuery for InMemoryAttendees {
    async fn list_by_event(
        &self,
        event_id: Uuid,
    ) -> Result<Vec<EventAttendee>, AttendeeQueryError> {
        self.events
            .get_active(event_id)
            .ok_or(AttendeeQueryError::EventNotFound)?;

        Ok(self
            .newest_first(|a| a.event_id == event_id)
            .into_iter()
            .filter_map(|a| {
                let user = self.users.get(a.user_id)?;
                Some(EventAttendee {
                    attendance_id: a.id,
                    registered_at: a.created_at,
                    user: summary(&user),
                })
            })
            .collect())
    }

    async fn list_by_user(
        &self,
        user_id: UserId,
    ) -> Result<Vec<UserAttendance>, AttendeeQueryError> {
        Ok(self
            .newest_first(|a| a.user_id == user_id)
            .into_iter()
            .filter_map(|a| {
                let event = self.events.get_active(a.event_id)?;
                Some(UserAttendance {
                    attendance_id: a.id,
                    registered_at: a.created_at,
                    event: EventDetails {
                        id: event.id,
                        title: event.title,
                        date: event.date,
                        location: event.location,
                        city: event.city,
                    },
                })
            })
            .collect())
    }
}
