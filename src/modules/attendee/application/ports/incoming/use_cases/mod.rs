pub mod list_event_attendees;
pub mod list_user_attendances;
pub mod register_attendee;

pub use list_event_attendees::{ListEventAttendeesError, ListEventAttendeesUseCase};
pub use list_user_attendances::{ListUserAttendancesError, ListUserAttendancesUseCase};
pub use register_attendee::{RegisterAttendeeError, RegisterAttendeeUseCase};
