use std::sync::Arc;

use crate::modules::event::application::ports::incoming::use_cases::{
    CreateEventUseCase, GetActiveEventUseCase, IssueAttendeePassUseCase, ListEventsUseCase,
    PatchEventUseCase, RestoreEventUseCase, SoftDeleteEventUseCase,
};

#[derive(Clone)]
pub struct EventUseCases {
    pub create: Arc<dyn CreateEventUseCase + Send + Sync>,
    pub get_active: Arc<dyn GetActiveEventUseCase + Send + Sync>,
    pub list: Arc<dyn ListEventsUseCase + Send + Sync>,
    pub patch: Arc<dyn PatchEventUseCase + Send + Sync>,
    pub soft_delete: Arc<dyn SoftDeleteEventUseCase + Send + Sync>,
    pub restore: Arc<dyn RestoreEventUseCase + Send + Sync>,
    pub issue_pass: Arc<dyn IssueAttendeePassUseCase + Send + Sync>,
}
