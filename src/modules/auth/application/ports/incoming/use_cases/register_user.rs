use async_trait::async_trait;
use hub_core::requests::RegisterInput;
use hub_core::UserProfile;
use std::fmt;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub enum RegisterUserError {
    InvalidUsername(String),
    InvalidEmail(String),
    WeakPassword(String),
    UsernameTaken,
    EmailTaken,
    HashingFailed(String),
    RepositoryError(String),
}

impl fmt::Display for RegisterUserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegisterUserError::InvalidUsername(msg)
            | RegisterUserError::InvalidEmail(msg)
            | RegisterUserError::WeakPassword(msg) => f.write_str(msg),
            RegisterUserError::UsernameTaken => write!(f, "Username already taken"),
            RegisterUserError::EmailTaken => write!(f, "Email already registered"),
            RegisterUserError::HashingFailed(msg) => write!(f, "hashing failed: {}", msg),
            RegisterUserError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait RegisterUserUseCase: Send + Sync {
    async fn execute(&self, input: RegisterInput) -> Result<UserProfile, RegisterUserError>;
}
