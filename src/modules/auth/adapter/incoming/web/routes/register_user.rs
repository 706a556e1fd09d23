use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::ports::incoming::use_cases::{
    RegisterUserCommand, RegisterUserCommandError, RegisterUserError, RegisteredUser,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterUserRequest {
    /// Display name
    #[schema(example = "Ada Lovelace")]
    pub name: String,

    /// Email address (stored lower-case)
    #[schema(example = "ada@example.com")]
    pub email: String,

    /// At least 6 characters
    #[schema(example = "secret1")]
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RegisteredUserResponse {
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    pub id: String,
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    #[schema(example = "ada@example.com")]
    pub email: String,
    pub created_at: String,
}

impl From<RegisteredUser> for RegisteredUserResponse {
    fn from(user: RegisteredUser) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name,
            email: user.email,
            created_at: user.created_at.to_rfc3339(),
        }
    }
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "auth",
    request_body = RegisterUserRequest,
    responses(
        (status = 201, description = "User created", body = inline(SuccessResponse<RegisteredUserResponse>)),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 409, description = "Email already registered", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[post("/api/auth/register")]
pub async fn register_user_handler(
    data: web::Data<AppState>,
    payload: web::Json<RegisterUserRequest>,
) -> impl Responder {
    let payload = payload.into_inner();

    let command = match RegisterUserCommand::new(payload.name, payload.email, payload.password) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data.auth.register.execute(command).await {
        Ok(user) => ApiResponse::created(RegisteredUserResponse::from(user)),
        Err(err) => map_register_error(err),
    }
}

fn map_command_error(err: RegisterUserCommandError) -> HttpResponse {
    let code = match err {
        RegisterUserCommandError::EmptyName => "EMPTY_NAME",
        RegisterUserCommandError::NameTooLong => "NAME_TOO_LONG",
        RegisterUserCommandError::EmptyEmail => "EMPTY_EMAIL",
        RegisterUserCommandError::InvalidEmailFormat => "INVALID_EMAIL",
        RegisterUserCommandError::PasswordTooShort => "PASSWORD_TOO_SHORT",
    };
    ApiResponse::bad_request(code, &err.to_string())
}

fn map_register_error(err: RegisterUserError) -> HttpResponse {
    match err {
        RegisterUserError::EmailAlreadyExists => {
            ApiResponse::conflict("EMAIL_ALREADY_EXISTS", "Email is already registered")
        }
        RegisterUserError::HashingFailed(msg) | RegisterUserError::RepositoryError(msg) => {
            error!("User registration failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
