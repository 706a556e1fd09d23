use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::ports::incoming::use_cases::{
    LoginResult, LoginUserCommand, LoginUserCommandError, LoginUserError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Login request from client
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequestDto {
    #[schema(example = "ada@example.com")]
    pub email: String,

    #[schema(example = "secret1")]
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    /// JWT access token
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub access_token: String,

    #[schema(example = "Bearer")]
    pub token_type: String,

    /// Seconds until the token expires
    #[schema(example = 1800)]
    pub expires_in: i64,

    pub user: LoginUserInfo,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginUserInfo {
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    pub id: String,
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    #[schema(example = "ada@example.com")]
    pub email: String,
}

impl From<LoginResult> for LoginResponse {
    fn from(result: LoginResult) -> Self {
        Self {
            access_token: result.access_token,
            token_type: result.token_type,
            expires_in: result.expires_in,
            user: LoginUserInfo {
                id: result.user_id.to_string(),
                name: result.name,
                email: result.email,
            },
        }
    }
}

/// User login
///
/// Authenticates a user with email and password and returns a JWT access token.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Login successful", body = inline(SuccessResponse<LoginResponse>)),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[post("/api/auth/login")]
pub async fn login_user_handler(
    data: web::Data<AppState>,
    payload: web::Json<LoginRequestDto>,
) -> impl Responder {
    let payload = payload.into_inner();

    let command = match LoginUserCommand::new(payload.email, payload.password) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data.auth.login.execute(command).await {
        Ok(result) => ApiResponse::success(LoginResponse::from(result)),
        Err(err) => map_login_error(err),
    }
}

fn map_command_error(err: LoginUserCommandError) -> HttpResponse {
    let code = match err {
        LoginUserCommandError::EmptyEmail => "EMPTY_EMAIL",
        LoginUserCommandError::InvalidEmailFormat => "INVALID_EMAIL",
        LoginUserCommandError::EmptyPassword => "EMPTY_PASSWORD",
    };
    ApiResponse::bad_request(code, &err.to_string())
}

fn map_login_error(err: LoginUserError) -> HttpResponse {
    match err {
        LoginUserError::InvalidCredentials => {
            warn!("Failed login attempt");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid email or password")
        }
        LoginUserError::PasswordVerificationFailed(msg)
        | LoginUserError::TokenGenerationFailed(msg)
        | LoginUserError::QueryError(msg) => {
            error!("Login failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
