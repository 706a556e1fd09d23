use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::token_provider::{
    TokenProvider, ACCESS_TOKEN_TYPE,
};
use crate::shared::api::ApiResponse;

/// Caller holding a valid access token
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

/// Caller that may be anonymous.
///
/// No `Authorization` header yields `user_id: None`; a header carrying a bad
/// token is still rejected with 401.
#[derive(Debug, Clone, Copy)]
pub struct MaybeUser {
    pub user_id: Option<UserId>,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

fn authenticate(req: &HttpRequest, header_value: &str) -> Result<UserId, ActixError> {
    let provider = req
        .app_data::<web::Data<Arc<dyn TokenProvider + Send + Sync>>>()
        .ok_or_else(|| {
            tracing::error!("TokenProvider is not registered as app data");
            create_api_error(ApiResponse::internal_error())
        })?;

    let token = header_value.strip_prefix("Bearer ").ok_or_else(|| {
        create_api_error(ApiResponse::unauthorized(
            "MISSING_AUTH_HEADER",
            "Missing or invalid authorization header",
        ))
    })?;

    let claims = provider.verify_token(token).map_err(|_| {
        create_api_error(ApiResponse::unauthorized(
            "INVALID_TOKEN",
            "Invalid or expired token",
        ))
    })?;

    if claims.token_type != ACCESS_TOKEN_TYPE {
        return Err(create_api_error(ApiResponse::unauthorized(
            "INVALID_TOKEN_TYPE",
            "Invalid token type",
        )));
    }

    Ok(UserId::from(claims.sub))
}

fn authorization_header(req: &HttpRequest) -> Option<Result<&str, ActixError>> {
    req.headers().get("Authorization").map(|value| {
        value.to_str().map_err(|_| {
            create_api_error(ApiResponse::unauthorized(
                "MISSING_AUTH_HEADER",
                "Missing or invalid authorization header",
            ))
        })
    })
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let result = match authorization_header(req) {
            None => Err(create_api_error(ApiResponse::unauthorized(
                "MISSING_AUTH_HEADER",
                "Missing or invalid authorization header",
            ))),
            Some(header) => {
                header.and_then(|value| authenticate(req, value).map(|user_id| Self { user_id }))
            }
        };

        ready(result)
    }
}

impl FromRequest for MaybeUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let result = match authorization_header(req) {
            None => Ok(Self { user_id: None }),
            Some(header) => header.and_then(|value| {
                authenticate(req, value).map(|user_id| Self {
                    user_id: Some(user_id),
                })
            }),
        };

        ready(result)
    }
}
