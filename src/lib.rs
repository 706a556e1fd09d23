pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::{attendee, auth, event, qr, scanner};

use crate::attendee::application::AttendeeUseCases;
use crate::auth::application::AuthUseCases;
use crate::event::application::EventUseCases;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub auth: AuthUseCases,
    pub event: EventUseCases,
    pub attendee: AttendeeUseCases,
}
