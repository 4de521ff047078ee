use async_trait::async_trait;
use hub_core::{PromotionPost, Reaction};
use tracing::debug;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::promotion::application::ports::incoming::use_cases::{
    ReactToPromotionError, ReactToPromotionUseCase,
};
use crate::promotion::application::ports::outgoing::{
    PromotionRepository, PromotionRepositoryError,
};

pub struct ReactToPromotionService<R>
where
    R: PromotionRepository,
{
    repository: R,
}

impl<R> ReactToPromotionService<R>
where
    R: PromotionRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ReactToPromotionUseCase for ReactToPromotionService<R>
where
    R: PromotionRepository + Send + Sync,
{
    async fn execute(
        &self,
        user: UserId,
        promotion_id: Uuid,
        reaction: Reaction,
    ) -> Result<PromotionPost, ReactToPromotionError> {
        let post = self
            .repository
            .react(promotion_id, user, reaction)
            .await
            .map_err(|e| match e {
                PromotionRepositoryError::NotFound => ReactToPromotionError::NotFound,
                other => ReactToPromotionError::RepositoryError(other.to_string()),
            })?;

        debug!(
            %promotion_id,
            %user,
            reaction = reaction.as_str(),
            likes = post.number_of_likes,
            dislikes = post.number_of_dislikes,
            "Reaction applied"
        );
        Ok(post)
    }
}
