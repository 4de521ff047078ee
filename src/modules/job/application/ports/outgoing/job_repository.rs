use async_trait::async_trait;
use hub_core::requests::JobInput;
use hub_core::{ExperienceRange, Job, SalaryRange};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, PartialEq)]
pub struct JobData {
    pub title: String,
    pub company: String,
    pub description: String,
    pub location: String,
    pub job_type: String,
    pub salary: SalaryRange,
    pub experience: ExperienceRange,
    pub skills: Vec<String>,
    pub apply_link: String,
}

impl From<JobInput> for JobData {
    fn from(input: JobInput) -> Self {
        Self {
            title: input.title.trim().to_string(),
            company: input.company.trim().to_string(),
            description: input.description.trim().to_string(),
            location: input.location.trim().to_string(),
            job_type: input.job_type.trim().to_string(),
            salary: input.salary,
            experience: input.experience,
            skills: input
                .skills
                .iter()
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
            apply_link: input.apply_link.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum JobRepositoryError {
    #[error("Job not found")]
    NotFound,

    #[error("Unknown poster")]
    UnknownPoster,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[async_trait]
pub trait JobRepository: Send + Sync {
    async fn create(&self, poster: UserId, data: JobData) -> Result<Job, JobRepositoryError>;

    /// Adds `user` to the applicants unless already there and returns the
    /// stored job either way.
    async fn add_applicant(&self, id: Uuid, user: UserId) -> Result<Job, JobRepositoryError>;
}
