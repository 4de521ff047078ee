use async_trait::async_trait;
use hub_core::PromotionPost;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum PromotionQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Corrupt row: {0}")]
    CorruptRow(String),
}

/// Listings are newest first.
#[async_trait]
pub trait PromotionQuery: Send + Sync {
    async fn list_all(&self) -> Result<Vec<PromotionPost>, PromotionQueryError>;

    async fn list_by_owner(&self, owner: UserId) -> Result<Vec<PromotionPost>, PromotionQueryError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<PromotionPost>, PromotionQueryError>;
}
