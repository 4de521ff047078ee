use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteHackathonPostError {
    #[error("Post not found")]
    NotFound,

    #[error("You can only delete your own posts")]
    NotOwner,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteHackathonPostUseCase: Send + Sync {
    async fn execute(&self, user: UserId, post_id: Uuid) -> Result<(), DeleteHackathonPostError>;
}
