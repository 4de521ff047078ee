use async_trait::async_trait;
use hub_core::MentorApplication;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListMentorsError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait ListMentorsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<MentorApplication>, ListMentorsError>;
}
