use async_trait::async_trait;
use hub_core::forms::ValidationErrors;
use hub_core::requests::JobInput;
use hub_core::Job;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateJobError {
    #[error("Invalid job posting: {}", .0.summary())]
    Invalid(ValidationErrors),

    #[error("Unknown poster")]
    UnknownPoster,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateJobUseCase: Send + Sync {
    async fn execute(&self, poster: UserId, input: JobInput) -> Result<Job, CreateJobError>;
}
