//! Door-side check-in workflow: scan a pass, confirm the event, register.
pub mod adapter;
pub mod application;
