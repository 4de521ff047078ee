use async_trait::async_trait;
use hub_core::MentorApplication;

#[derive(Debug, Clone, thiserror::Error)]
pub enum MentorQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Corrupt row: {0}")]
    CorruptRow(String),
}

#[async_trait]
pub trait MentorQuery: Send + Sync {
    /// Approved and pending applications, newest first. Rejected ones are
    /// never listed.
    async fn list_visible(&self) -> Result<Vec<MentorApplication>, MentorQueryError>;
}
