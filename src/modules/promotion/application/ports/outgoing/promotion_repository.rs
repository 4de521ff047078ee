use async_trait::async_trait;
use hub_core::requests::PromotionInput;
use hub_core::{PromotionPost, Reaction};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

/// Editable columns of a promotion. Reactions are never written through
/// this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromotionData {
    pub title: String,
    pub description: String,
    pub link: String,
}

impl From<PromotionInput> for PromotionData {
    fn from(input: PromotionInput) -> Self {
        Self {
            title: input.title.trim().to_string(),
            description: input.description.trim().to_string(),
            link: input.link.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum PromotionRepositoryError {
    #[error("Promotion not found")]
    NotFound,

    #[error("Unknown author")]
    UnknownAuthor,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[async_trait]
pub trait PromotionRepository: Send + Sync {
    async fn create(
        &self,
        owner: UserId,
        data: PromotionData,
    ) -> Result<PromotionPost, PromotionRepositoryError>;

    async fn update(
        &self,
        id: Uuid,
        data: PromotionData,
    ) -> Result<PromotionPost, PromotionRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), PromotionRepositoryError>;

    /// Applies the like/dislike toggle for `user` atomically and returns the
    /// stored post. Two reactions on the same post never interleave.
    async fn react(
        &self,
        id: Uuid,
        user: UserId,
        reaction: Reaction,
    ) -> Result<PromotionPost, PromotionRepositoryError>;
}
