pub mod attendee_pass;
pub mod create_event;
pub mod delete_event;
pub mod dto;
pub mod get_event;
pub mod list_events;
pub mod patch_event;
pub mod restore_event;

pub use attendee_pass::*;
pub use create_event::*;
pub use delete_event::*;
pub use get_event::*;
pub use list_events::*;
pub use patch_event::*;
pub use restore_event::*;
