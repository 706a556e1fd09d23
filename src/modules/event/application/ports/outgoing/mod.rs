pub mod event_query;
pub mod event_repository;

pub use event_query::{EventQuery, EventQueryError};
pub use event_repository::{
    CreateEventData, EventRepository, EventRepositoryError, PatchEventData, PatchField,
};
