use async_trait::async_trait;
use hub_core::requests::ProfileInput;
use hub_core::UserProfile;

use crate::auth::application::domain::entities::UserId;

/// A validated registration, password already hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub full_name: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("Username already taken")]
    UsernameTaken,

    #[error("Email already registered")]
    EmailTaken,

    #[error("User not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, user: NewUser) -> Result<UserProfile, UserRepositoryError>;

    /// Replaces the profile-completion fields of `user_id`.
    async fn update_profile(
        &self,
        user_id: UserId,
        profile: ProfileInput,
    ) -> Result<UserProfile, UserRepositoryError>;
}
