use async_trait::async_trait;
use hub_core::Job;
use tracing::info;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::job::application::ports::incoming::use_cases::{ApplyToJobError, ApplyToJobUseCase};
use crate::job::application::ports::outgoing::{JobRepository, JobRepositoryError};

pub struct ApplyToJobService<R>
where
    R: JobRepository,
{
    repository: R,
}

impl<R> ApplyToJobService<R>
where
    R: JobRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ApplyToJobUseCase for ApplyToJobService<R>
where
    R: JobRepository + Send + Sync,
{
    async fn execute(&self, user: UserId, job_id: Uuid) -> Result<Job, ApplyToJobError> {
        let job = self
            .repository
            .add_applicant(job_id, user)
            .await
            .map_err(|e| match e {
                JobRepositoryError::NotFound => ApplyToJobError::NotFound,
                other => ApplyToJobError::RepositoryError(other.to_string()),
            })?;

        info!(%job_id, %user, applicants = job.applicants.len(), "Job application recorded");
        Ok(job)
    }
}
