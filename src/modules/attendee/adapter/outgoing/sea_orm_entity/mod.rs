pub mod event_attendees;
