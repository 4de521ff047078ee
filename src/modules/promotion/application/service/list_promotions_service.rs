use async_trait::async_trait;
use hub_core::PromotionPost;

use crate::auth::application::domain::entities::UserId;
use crate::promotion::application::ports::incoming::use_cases::{
    ListMyPromotionsUseCase, ListPromotionsError, ListPromotionsUseCase,
};
use crate::promotion::application::ports::outgoing::PromotionQuery;

/// Serves both the public feed and the "mine" listing.
pub struct ListPromotionsService<Q>
where
    Q: PromotionQuery,
{
    query: Q,
}

impl<Q> ListPromotionsService<Q>
where
    Q: PromotionQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListPromotionsUseCase for ListPromotionsService<Q>
where
    Q: PromotionQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<PromotionPost>, ListPromotionsError> {
        self.query
            .list_all()
            .await
            .map_err(|e| ListPromotionsError::QueryError(e.to_string()))
    }
}

#[async_trait]
impl<Q> ListMyPromotionsUseCase for ListPromotionsService<Q>
where
    Q: PromotionQuery + Send + Sync,
{
    async fn execute(&self, owner: UserId) -> Result<Vec<PromotionPost>, ListPromotionsError> {
        self.query
            .list_by_owner(owner)
            .await
            .map_err(|e| ListPromotionsError::QueryError(e.to_string()))
    }
}
