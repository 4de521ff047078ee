use async_trait::async_trait;
use hub_core::forms::ValidationErrors;
use hub_core::requests::ProfileInput;
use hub_core::UserProfile;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateProfileError {
    #[error("Invalid profile: {}", .0.summary())]
    Invalid(ValidationErrors),

    #[error("User not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateProfileUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: UserId,
        input: ProfileInput,
    ) -> Result<UserProfile, UpdateProfileError>;
}
