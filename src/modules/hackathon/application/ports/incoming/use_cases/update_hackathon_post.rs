use async_trait::async_trait;
use hub_core::forms::ValidationErrors;
use hub_core::requests::HackathonPostInput;
use hub_core::HackathonPost;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateHackathonPostError {
    #[error("Post not found")]
    NotFound,

    #[error("You can only edit your own posts")]
    NotOwner,

    #[error("Invalid post: {}", .0.summary())]
    Invalid(ValidationErrors),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateHackathonPostUseCase: Send + Sync {
    async fn execute(
        &self,
        user: UserId,
        post_id: Uuid,
        input: HackathonPostInput,
    ) -> Result<HackathonPost, UpdateHackathonPostError>;
}
