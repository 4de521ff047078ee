use async_trait::async_trait;
use hub_core::HackathonPost;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum HackathonQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Corrupt row: {0}")]
    CorruptRow(String),
}

/// Read side of the hackathon board. Posts come back with their author
/// summary already embedded.
#[async_trait]
pub trait HackathonQuery: Send + Sync {
    /// Every post, newest first.
    async fn list(&self) -> Result<Vec<HackathonPost>, HackathonQueryError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<HackathonPost>, HackathonQueryError>;
}
