pub mod attendee_use_cases;
pub mod domain;
pub mod ports;
pub mod services;

pub use attendee_use_cases::AttendeeUseCases;
