use async_trait::async_trait;
use hub_core::PromotionPost;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListPromotionsError {
    #[error("Query error: {0}")]
    QueryError(String),
}

/// Public feed.
#[async_trait]
pub trait ListPromotionsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<PromotionPost>, ListPromotionsError>;
}

/// Promotions created by the signed-in user.
#[async_trait]
pub trait ListMyPromotionsUseCase: Send + Sync {
    async fn execute(&self, owner: UserId) -> Result<Vec<PromotionPost>, ListPromotionsError>;
}
