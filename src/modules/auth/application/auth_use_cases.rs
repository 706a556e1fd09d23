use std::sync::Arc;

use crate::auth::application::ports::incoming::use_cases::{
    LoginUserUseCase, RegisterUserUseCase,
};

#[derive(Clone)]
pub struct AuthUseCases {
    pub register: Arc<dyn RegisterUserUseCase + Send + Sync>,
    pub login: Arc<dyn LoginUserUseCase + Send + Sync>,
}
