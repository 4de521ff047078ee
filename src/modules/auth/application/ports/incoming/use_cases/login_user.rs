use async_trait::async_trait;
use hub_core::requests::{LoginInput, LoginOutput};

#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginUserError {
    #[error("{0}")]
    InvalidInput(String),

    /// Unknown email and wrong password are indistinguishable to callers.
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Password verification failed: {0}")]
    VerificationFailed(String),

    #[error("Token generation failed: {0}")]
    TokenFailed(String),

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait LoginUserUseCase: Send + Sync {
    async fn execute(&self, input: LoginInput) -> Result<LoginOutput, LoginUserError>;
}
