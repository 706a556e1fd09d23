pub mod attendee_query;
pub mod attendee_repository;

pub use attendee_query::{AttendeeQuery, AttendeeQueryError};
pub use attendee_repository::{AttendeeRepository, AttendeeRepositoryError};
