pub mod list_event_attendees_service;
pub mod list_user_attendances_service;
pub mod register_attendee_service;

pub use list_event_attendees_service::ListEventAttendeesService;
pub use list_user_attendances_service::ListUserAttendancesService;
pub use register_attendee_service::RegisterAttendeeService;
