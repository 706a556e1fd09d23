use async_trait::async_trait;
use chrono::{DateTime, Utc};
use email_address::EmailAddress;
use serde::Serialize;

use crate::auth::application::domain::entities::UserId;

pub const MIN_PASSWORD_LENGTH: usize = 6;
const MAX_NAME_LENGTH: usize = 100;

//
// ──────────────────────────────────────────────────────────
// Register User Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct RegisterUserCommand {
    name: String,
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegisterUserCommandError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Name too long")]
    NameTooLong,

    #[error("Email cannot be empty")]
    EmptyEmail,

    #[error("Invalid email format")]
    InvalidEmailFormat,

    #[error("Password must be at least 6 characters")]
    PasswordTooShort,
}

impl RegisterUserCommand {
    pub fn new(
        name: String,
        email: String,
        password: String,
    ) -> Result<Self, RegisterUserCommandError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RegisterUserCommandError::EmptyName);
        }
        if name.chars().count() > MAX_NAME_LENGTH {
            return Err(RegisterUserCommandError::NameTooLong);
        }

        let email = email.trim();
        if email.is_empty() {
            return Err(RegisterUserCommandError::EmptyEmail);
        }
        if !EmailAddress::is_valid(email) {
            return Err(RegisterUserCommandError::InvalidEmailFormat);
        }

        if password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(RegisterUserCommandError::PasswordTooShort);
        }

        Ok(Self {
            name: name.to_string(),
            email: email.to_lowercase(),
            password,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Normalized (lower-case) email
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

//
// ──────────────────────────────────────────────────────────
// Result / Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Serialize)]
pub struct RegisteredUser {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum RegisterUserError {
    #[error("Email already registered")]
    EmailAlreadyExists,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait RegisterUserUseCase: Send + Sync {
    async fn execute(
        &self,
        command: RegisterUserCommand,
    ) -> Result<RegisteredUser, RegisterUserError>;
}
