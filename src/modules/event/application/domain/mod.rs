pub mod edit_policy;
pub mod entities;
pub mod validation;

pub use edit_policy::{EditDenied, EditPolicy};
pub use entities::{Event, EventStatus};
