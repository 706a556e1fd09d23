pub mod create_event;
pub mod delete_event;
pub mod get_event;
pub mod issue_attendee_pass;
pub mod list_events;
pub mod patch_event;
pub mod restore_event;

pub use create_event::{CreateEventCommand, CreateEventError, CreateEventUseCase};
pub use delete_event::{SoftDeleteEventError, SoftDeleteEventUseCase};
pub use get_event::{GetActiveEventError, GetActiveEventUseCase};
pub use issue_attendee_pass::{AttendeePass, IssueAttendeePassError, IssueAttendeePassUseCase};
pub use list_events::{ListEventsError, ListEventsUseCase};
pub use patch_event::{PatchEventCommand, PatchEventError, PatchEventUseCase};
pub use restore_event::{RestoreEventError, RestoreEventUseCase};
