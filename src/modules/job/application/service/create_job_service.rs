use async_trait::async_trait;
use hub_core::requests::{FormInput, JobInput};
use hub_core::Job;
use tracing::info;

use crate::auth::application::domain::entities::UserId;
use crate::job::application::ports::incoming::use_cases::{CreateJobError, CreateJobUseCase};
use crate::job::application::ports::outgoing::{JobRepository, JobRepositoryError};

pub struct CreateJobService<R>
where
    R: JobRepository,
{
    repository: R,
}

impl<R> CreateJobService<R>
where
    R: JobRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateJobUseCase for CreateJobService<R>
where
    R: JobRepository + Send + Sync,
{
    async fn execute(&self, poster: UserId, input: JobInput) -> Result<Job, CreateJobError> {
        let errors = input.validate();
        if !errors.is_empty() {
            return Err(CreateJobError::Invalid(errors));
        }

        let job = self
            .repository
            .create(poster, input.into())
            .await
            .map_err(|e| match e {
                JobRepositoryError::UnknownPoster => CreateJobError::UnknownPoster,
                other => CreateJobError::RepositoryError(other.to_string()),
            })?;

        info!(job_id = %job.id, %poster, "Job posted");
        Ok(job)
    }
}
