use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::ports::{
    incoming::use_cases::{LoginResult, LoginUserCommand, LoginUserError, LoginUserUseCase},
    outgoing::{PasswordHasher, TokenProvider, UserQuery},
};

#[derive(Clone)]
pub struct LoginUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    query: Q,
    hasher: Arc<dyn PasswordHasher + Send + Sync>,
    tokens: Arc<dyn TokenProvider + Send + Sync>,
}

impl<Q> LoginUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(
        query: Q,
        hasher: Arc<dyn PasswordHasher + Send + Sync>,
        tokens: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            query,
            hasher,
            tokens,
        }
    }
}

#[async_trait]
impl<Q> LoginUserUseCase for LoginUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, command: LoginUserCommand) -> Result<LoginResult, LoginUserError> {
        // 1️⃣ Find user by (normalized) email
        let user = self
            .query
            .find_by_email(command.email())
            .await
            .map_err(|e| LoginUserError::QueryError(e.to_string()))?
            .ok_or(LoginUserError::InvalidCredentials)?;

        // 2️⃣ Verify password
        let is_valid = self
            .hasher
            .verify_password(command.password(), &user.password_hash)
            .await
            .map_err(|e| LoginUserError::PasswordVerificationFailed(e.to_string()))?;

        if !is_valid {
            return Err(LoginUserError::InvalidCredentials);
        }

        // 3️⃣ Issue access token
        let access_token = self
            .tokens
            .generate_access_token(user.id.value())
            .map_err(|e| LoginUserError::TokenGenerationFailed(e.to_string()))?;

        Ok(LoginResult {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in: self.tokens.access_token_ttl(),
            user_id: user.id,
            name: user.name,
            email: user.email,
        })
    }
}
