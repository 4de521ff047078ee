use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeletePromotionError {
    #[error("Promotion not found")]
    NotFound,

    #[error("You can only delete your own promotions")]
    NotOwner,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeletePromotionUseCase: Send + Sync {
    async fn execute(&self, user: UserId, promotion_id: Uuid) -> Result<(), DeletePromotionError>;
}
