use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::promotion::application::ports::incoming::use_cases::{
    DeletePromotionError, DeletePromotionUseCase,
};
use crate::promotion::application::ports::outgoing::{
    PromotionQuery, PromotionRepository, PromotionRepositoryError,
};

pub struct DeletePromotionService<Q, R>
where
    Q: PromotionQuery,
    R: PromotionRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> DeletePromotionService<Q, R>
where
    Q: PromotionQuery,
    R: PromotionRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> DeletePromotionUseCase for DeletePromotionService<Q, R>
where
    Q: PromotionQuery + Send + Sync,
    R: PromotionRepository + Send + Sync,
{
    async fn execute(&self, user: UserId, promotion_id: Uuid) -> Result<(), DeletePromotionError> {
        let existing = self
            .query
            .find_by_id(promotion_id)
            .await
            .map_err(|e| DeletePromotionError::RepositoryError(e.to_string()))?
            .ok_or(DeletePromotionError::NotFound)?;

        if existing.user != user.value() {
            warn!(%promotion_id, %user, "Rejected delete of another user's promotion");
            return Err(DeletePromotionError::NotOwner);
        }

        self.repository
            .delete(promotion_id)
            .await
            .map_err(|e| match e {
                PromotionRepositoryError::NotFound => DeletePromotionError::NotFound,
                other => DeletePromotionError::RepositoryError(other.to_string()),
            })?;

        info!(%promotion_id, "Promotion deleted");
        Ok(())
    }
}
