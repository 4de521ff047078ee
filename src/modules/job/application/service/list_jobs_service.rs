use async_trait::async_trait;
use hub_core::jobs::{JobQuery, Pagination};
use hub_core::Job;

use crate::job::application::ports::incoming::use_cases::{ListJobsError, ListJobsUseCase};
use crate::job::application::ports::outgoing::JobSearch;

pub struct ListJobsService<S>
where
    S: JobSearch,
{
    search: S,
}

impl<S> ListJobsService<S>
where
    S: JobSearch,
{
    pub fn new(search: S) -> Self {
        Self { search }
    }
}

#[async_trait]
impl<S> ListJobsUseCase for ListJobsService<S>
where
    S: JobSearch + Send + Sync,
{
    async fn execute(&self, query: JobQuery) -> Result<(Vec<Job>, Pagination), ListJobsError> {
        let page = self
            .search
            .search(&query)
            .await
            .map_err(|e| ListJobsError::QueryError(e.to_string()))?;

        let pagination = Pagination::new(query.page(), query.limit(), page.total);
        Ok((page.jobs, pagination))
    }
}
