mod apply_to_job_service;
mod create_job_service;
mod list_jobs_service;

pub use apply_to_job_service::ApplyToJobService;
pub use create_job_service::CreateJobService;
pub use list_jobs_service::ListJobsService;
