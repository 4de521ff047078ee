use async_trait::async_trait;
use hub_core::{PromotionPost, Reaction};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ReactToPromotionError {
    #[error("Promotion not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ReactToPromotionUseCase: Send + Sync {
    /// Toggles the reaction and returns the post as stored afterwards.
    async fn execute(
        &self,
        user: UserId,
        promotion_id: Uuid,
        reaction: Reaction,
    ) -> Result<PromotionPost, ReactToPromotionError>;
}
