use async_trait::async_trait;
use hub_core::forms::ValidationErrors;
use hub_core::requests::HackathonPostInput;
use hub_core::HackathonPost;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateHackathonPostError {
    #[error("Invalid post: {}", .0.summary())]
    Invalid(ValidationErrors),

    #[error("Author account no longer exists")]
    UnknownAuthor,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateHackathonPostUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        input: HackathonPostInput,
    ) -> Result<HackathonPost, CreateHackathonPostError>;
}
