use async_trait::async_trait;
use hub_core::jobs::{JobQuery, Pagination};
use hub_core::Job;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListJobsError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait ListJobsUseCase: Send + Sync {
    async fn execute(&self, query: JobQuery) -> Result<(Vec<Job>, Pagination), ListJobsError>;
}
