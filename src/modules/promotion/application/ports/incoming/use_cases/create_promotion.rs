use async_trait::async_trait;
use hub_core::forms::ValidationErrors;
use hub_core::requests::PromotionInput;
use hub_core::PromotionPost;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreatePromotionError {
    #[error("Invalid promotion: {}", .0.summary())]
    Invalid(ValidationErrors),

    #[error("Unknown author")]
    UnknownAuthor,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreatePromotionUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        input: PromotionInput,
    ) -> Result<PromotionPost, CreatePromotionError>;
}
