use async_trait::async_trait;
use hub_core::query::FounderParams;
use hub_core::UserProfile;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListUsersError {
    #[error("{0}")]
    InvalidQuery(String),

    #[error("Query error: {0}")]
    QueryError(String),
}

/// The founder directory: every user, narrowed and ordered by `params`.
#[async_trait]
pub trait ListUsersUseCase: Send + Sync {
    async fn execute(&self, params: FounderParams) -> Result<Vec<UserProfile>, ListUsersError>;
}
