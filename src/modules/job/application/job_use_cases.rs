use std::sync::Arc;

use crate::job::application::ports::incoming::use_cases::{
    ApplyToJobUseCase, CreateJobUseCase, ListJobsUseCase,
};

#[derive(Clone)]
pub struct JobUseCases {
    pub list: Arc<dyn ListJobsUseCase + Send + Sync>,
    pub create: Arc<dyn CreateJobUseCase + Send + Sync>,
    pub apply: Arc<dyn ApplyToJobUseCase + Send + Sync>,
}
