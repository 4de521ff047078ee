use async_trait::async_trait;
use hub_core::requests::{FormInput, PromotionInput};
use hub_core::PromotionPost;
use tracing::warn;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::promotion::application::ports::incoming::use_cases::{
    UpdatePromotionError, UpdatePromotionUseCase,
};
use crate::promotion::application::ports::outgoing::{
    PromotionQuery, PromotionRepository, PromotionRepositoryError,
};

pub struct UpdatePromotionService<Q, R>
where
    Q: PromotionQuery,
    R: PromotionRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> UpdatePromotionService<Q, R>
where
    Q: PromotionQuery,
    R: PromotionRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> UpdatePromotionUseCase for UpdatePromotionService<Q, R>
where
    Q: PromotionQuery + Send + Sync,
    R: PromotionRepository + Send + Sync,
{
    async fn execute(
        &self,
        user: UserId,
        promotion_id: Uuid,
        input: PromotionInput,
    ) -> Result<PromotionPost, UpdatePromotionError> {
        let existing = self
            .query
            .find_by_id(promotion_id)
            .await
            .map_err(|e| UpdatePromotionError::RepositoryError(e.to_string()))?
            .ok_or(UpdatePromotionError::NotFound)?;

        if existing.user != user.value() {
            warn!(%promotion_id, %user, "Rejected edit of another user's promotion");
            return Err(UpdatePromotionError::NotOwner);
        }

        let errors = input.validate();
        if !errors.is_empty() {
            return Err(UpdatePromotionError::Invalid(errors));
        }

        self.repository
            .update(promotion_id, input.into())
            .await
            .map_err(|e| match e {
                PromotionRepositoryError::NotFound => UpdatePromotionError::NotFound,
                other => UpdatePromotionError::RepositoryError(other.to_string()),
            })
    }
}
