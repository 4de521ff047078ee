mod apply_to_job;
mod create_job;
mod list_jobs;

pub use apply_to_job::apply_to_job_handler;
pub use create_job::create_job_handler;
pub use list_jobs::list_jobs_handler;
