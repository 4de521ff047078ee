use async_trait::async_trait;
use hub_core::requests::{FormInput, PromotionInput};
use hub_core::PromotionPost;
use tracing::info;

use crate::auth::application::domain::entities::UserId;
use crate::promotion::application::ports::incoming::use_cases::{
    CreatePromotionError, CreatePromotionUseCase,
};
use crate::promotion::application::ports::outgoing::{
    PromotionRepository, PromotionRepositoryError,
};

pub struct CreatePromotionService<R>
where
    R: PromotionRepository,
{
    repository: R,
}

impl<R> CreatePromotionService<R>
where
    R: PromotionRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreatePromotionUseCase for CreatePromotionService<R>
where
    R: PromotionRepository + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        input: PromotionInput,
    ) -> Result<PromotionPost, CreatePromotionError> {
        let errors = input.validate();
        if !errors.is_empty() {
            return Err(CreatePromotionError::Invalid(errors));
        }

        let post = self
            .repository
            .create(owner, input.into())
            .await
            .map_err(|e| match e {
                PromotionRepositoryError::UnknownAuthor => CreatePromotionError::UnknownAuthor,
                other => CreatePromotionError::RepositoryError(other.to_string()),
            })?;

        info!(promotion_id = %post.id, %owner, "Promotion created");
        Ok(post)
    }
}
