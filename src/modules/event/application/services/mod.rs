pub mod create_event_service;
pub mod get_active_event_service;
pub mod issue_attendee_pass_service;
pub mod list_events_service;
pub mod patch_event_service;
pub mod restore_event_service;
pub mod soft_delete_event_service;

pub use create_event_service::CreateEventService;
pub use get_active_event_service::GetActiveEventService;
pub use issue_attendee_pass_service::IssueAttendeePassService;
pub use list_events_service::ListEventsService;
pub use patch_event_service::PatchEventService;
pub use restore_event_service::RestoreEventService;
pub use soft_delete_event_service::SoftDeleteEventService;
