use async_trait::async_trait;
use email_address::EmailAddress;
use serde::Serialize;

use crate::auth::application::domain::entities::UserId;

// ========================= Login Command =========================

#[derive(Debug, Clone)]
pub struct LoginUserCommand {
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginUserCommandError {
    #[error("Email cannot be empty")]
    EmptyEmail,

    #[error("Invalid email format")]
    InvalidEmailFormat,

    #[error("Password cannot be empty")]
    EmptyPassword,
}

impl LoginUserCommand {
    pub fn new(email: String, password: String) -> Result<Self, LoginUserCommandError> {
        let email = email.trim();

        if email.is_empty() {
            return Err(LoginUserCommandError::EmptyEmail);
        }
        if !EmailAddress::is_valid(email) {
            return Err(LoginUserCommandError::InvalidEmailFormat);
        }
        if password.is_empty() {
            return Err(LoginUserCommandError::EmptyPassword);
        }

        Ok(Self {
            email: email.to_lowercase(),
            password,
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

// ====================== Login Result / Error =====================

#[derive(Debug, Clone, Serialize)]
pub struct LoginResult {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user_id: UserId,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginUserError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Password verification failed: {0}")]
    PasswordVerificationFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Query error: {0}")]
    QueryError(String),
}

// ====================== Incoming Port ============================

#[async_trait]
pub trait LoginUserUseCase: Send + Sync {
    async fn execute(&self, command: LoginUserCommand) -> Result<LoginResult, LoginUserError>;
}
