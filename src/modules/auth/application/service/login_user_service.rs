use async_trait::async_trait;
use email_address::EmailAddress;
use hub_core::requests::{LoginInput, LoginOutput};
use std::sync::Arc;
use tracing::{info, warn};

use crate::auth::application::ports::incoming::use_cases::{LoginUserError, LoginUserUseCase};
use crate::auth::application::ports::outgoing::{PasswordHasher, TokenProvider, UserQuery};

pub struct LoginUserService<Q>
where
    Q: UserQuery,
{
    query: Q,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenProvider>,
}

impl<Q> LoginUserService<Q>
where
    Q: UserQuery,
{
    pub fn new(query: Q, hasher: Arc<dyn PasswordHasher>, tokens: Arc<dyn TokenProvider>) -> Self {
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
    async fn execute(&self, input: LoginInput) -> Result<LoginOutput, LoginUserError> {
        let email = input.email.trim().to_lowercase();
        if email.is_empty() || input.password.is_empty() {
            return Err(LoginUserError::InvalidInput(
                "Email and password are required".to_string(),
            ));
        }
        if !EmailAddress::is_valid(&email) {
            return Err(LoginUserError::InvalidInput(
                "Invalid email format".to_string(),
            ));
        }

        let account = self
            .query
            .find_by_email(&email)
            .await
            .map_err(|e| LoginUserError::QueryError(e.to_string()))?
            .ok_or(LoginUserError::InvalidCredentials)?;

        let matches = self
            .hasher
            .verify_password(&input.password, &account.password_hash)
            .await
            .map_err(|e| LoginUserError::VerificationFailed(e.to_string()))?;

        if !matches {
            warn!(user_id = %account.id(), "Login rejected: wrong password");
            return Err(LoginUserError::InvalidCredentials);
        }

        let access_token = self
            .tokens
            .generate_access_token(account.profile.id)
            .map_err(|e| LoginUserError::TokenFailed(e.to_string()))?;

        info!(user_id = %account.id(), "User logged in");
        Ok(LoginOutput {
            access_token,
            user: account.profile,
        })
    }
}
