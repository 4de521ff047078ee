use async_trait::async_trait;
use hub_core::query::HackathonPostParams;
use hub_core::HackathonPost;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListHackathonPostsError {
    #[error("{0}")]
    InvalidQuery(String),

    #[error("Query error: {0}")]
    QueryError(String),
}

/// The collaborate board. `viewer` only matters for `tab=my`; an anonymous
/// viewer owns nothing.
#[async_trait]
pub trait ListHackathonPostsUseCase: Send + Sync {
    async fn execute(
        &self,
        params: HackathonPostParams,
        viewer: Option<UserId>,
    ) -> Result<Vec<HackathonPost>, ListHackathonPostsError>;
}
