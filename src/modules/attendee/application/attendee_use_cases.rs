use std::sync::Arc;

use crate::modules::attendee::application::ports::incoming::use_cases::{
    ListEventAttendeesUseCase, ListUserAttendancesUseCase, RegisterAttendeeUseCase,
};

#[derive(Clone)]
pub struct AttendeeUseCases {
    pub register: Arc<dyn RegisterAttendeeUseCase + Send + Sync>,
    pub list_by_event: Arc<dyn ListEventAttendeesUseCase + Send + Sync>,
    pub list_by_user: Arc<dyn ListUserAttendancesUseCase + Send + Sync>,
}
