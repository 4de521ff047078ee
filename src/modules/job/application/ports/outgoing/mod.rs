pub mod job_query;
pub mod job_repository;

pub use job_query::{JobPage, JobQueryError, JobSearch};
pub use job_repository::{JobData, JobRepository, JobRepositoryError};
