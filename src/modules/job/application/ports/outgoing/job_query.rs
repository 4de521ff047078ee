use async_trait::async_trait;
use hub_core::jobs::JobQuery;
use hub_core::Job;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum JobQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Corrupt row: {0}")]
    CorruptRow(String),
}

/// One page of matches plus the number of matches overall.
#[derive(Debug, Clone, PartialEq)]
pub struct JobPage {
    pub jobs: Vec<Job>,
    pub total: u64,
}

/// Filtering and paging happen in the store.
#[async_trait]
pub trait JobSearch: Send + Sync {
    /// Matches for `query`, newest first, cut to the requested page.
    async fn search(&self, query: &JobQuery) -> Result<JobPage, JobQueryError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Job>, JobQueryError>;
}
