mod apply_to_job;
mod create_job;
mod list_jobs;

pub use apply_to_job::{ApplyToJobError, ApplyToJobUseCase};
pub use create_job::{CreateJobError, CreateJobUseCase};
pub use list_jobs::{ListJobsError, ListJobsUseCase};
