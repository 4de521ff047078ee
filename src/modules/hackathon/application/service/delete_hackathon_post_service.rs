use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::hackathon::application::ports::incoming::use_cases::{
    DeleteHackathonPostError, DeleteHackathonPostUseCase,
};
use crate::hackathon::application::ports::outgoing::{
    HackathonQuery, HackathonRepository, HackathonRepositoryError,
};

pub struct DeleteHackathonPostService<Q, R>
where
    Q: HackathonQuery,
    R: HackathonRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> DeleteHackathonPostService<Q, R>
where
    Q: HackathonQuery,
    R: HackathonRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> DeleteHackathonPostUseCase for DeleteHackathonPostService<Q, R>
where
    Q: HackathonQuery + Send + Sync,
    R: HackathonRepository + Send + Sync,
{
    async fn execute(&self, user: UserId, post_id: Uuid) -> Result<(), DeleteHackathonPostError> {
        let existing = self
            .query
            .find_by_id(post_id)
            .await
            .map_err(|e| DeleteHackathonPostError::RepositoryError(e.to_string()))?
            .ok_or(DeleteHackathonPostError::NotFound)?;

        if !existing.is_owned_by(user.value()) {
            warn!(%post_id, %user, "Rejected delete of another user's post");
            return Err(DeleteHackathonPostError::NotOwner);
        }

        self.repository
            .delete(post_id)
            .await
            .map_err(|e| match e {
                HackathonRepositoryError::NotFound => DeleteHackathonPostError::NotFound,
                other => DeleteHackathonPostError::RepositoryError(other.to_string()),
            })?;

        info!(%post_id, "Hackathon post deleted");
        Ok(())
    }
}
