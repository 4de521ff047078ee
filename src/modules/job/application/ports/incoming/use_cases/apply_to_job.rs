use async_trait::async_trait;
use hub_core::Job;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ApplyToJobError {
    #[error("Job not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ApplyToJobUseCase: Send + Sync {
    async fn execute(&self, user: UserId, job_id: Uuid) -> Result<Job, ApplyToJobError>;
}
