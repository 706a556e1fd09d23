pub mod dto;
pub mod list_attendees;
pub mod list_event_attendees;
pub mod register_attendee;

pub use list_attendees::*;
pub use list_event_attendees::*;
pub use register_attendee::*;
