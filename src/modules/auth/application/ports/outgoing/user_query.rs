use async_trait::async_trait;
use hub_core::UserProfile;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserAccount;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Stored user is unreadable: {0}")]
    CorruptRow(String),
}

/// Read side of the users table.
#[async_trait]
pub trait UserQuery: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserAccount>, UserQueryError>;
    async fn find_profile(&self, user_id: Uuid) -> Result<Option<UserProfile>, UserQueryError>;

    /// Every user, newest first.
    async fn list_profiles(&self) -> Result<Vec<UserProfile>, UserQueryError>;
}
