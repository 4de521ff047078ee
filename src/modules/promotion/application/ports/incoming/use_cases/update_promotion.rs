use async_trait::async_trait;
use hub_core::forms::ValidationErrors;
use hub_core::requests::PromotionInput;
use hub_core::PromotionPost;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdatePromotionError {
    #[error("Promotion not found")]
    NotFound,

    #[error("You can only edit your own promotions")]
    NotOwner,

    #[error("Invalid promotion: {}", .0.summary())]
    Invalid(ValidationErrors),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdatePromotionUseCase: Send + Sync {
    async fn execute(
        &self,
        user: UserId,
        promotion_id: Uuid,
        input: PromotionInput,
    ) -> Result<PromotionPost, UpdatePromotionError>;
}
