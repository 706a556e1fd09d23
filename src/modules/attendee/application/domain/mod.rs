pub mod entities;

pub use entities::{
    Attendance, EventAttendee, EventDetails, EventSummary, RegisteredAttendance,
    UserAttendance, UserSummary,
};
