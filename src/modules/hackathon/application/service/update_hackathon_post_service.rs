use async_trait::async_trait;
use hub_core::requests::{FormInput, HackathonPostInput};
use hub_core::HackathonPost;
use tracing::warn;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::hackathon::application::ports::incoming::use_cases::{
    UpdateHackathonPostError, UpdateHackathonPostUseCase,
};
use crate::hackathon::application::ports::outgoing::{
    HackathonQuery, HackathonRepository, HackathonRepositoryError,
};

pub struct UpdateHackathonPostService<Q, R>
where
    Q: HackathonQuery,
    R: HackathonRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> UpdateHackathonPostService<Q, R>
where
    Q: HackathonQuery,
    R: HackathonRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> UpdateHackathonPostUseCase for UpdateHackathonPostService<Q, R>
where
    Q: HackathonQuery + Send + Sync,
    R: HackathonRepository + Send + Sync,
{
    async fn execute(
        &self,
        user: UserId,
        post_id: Uuid,
        input: HackathonPostInput,
    ) -> Result<HackathonPost, UpdateHackathonPostError> {
        let existing = self
            .query
            .find_by_id(post_id)
            .await
            .map_err(|e| UpdateHackathonPostError::RepositoryError(e.to_string()))?
            .ok_or(UpdateHackathonPostError::NotFound)?;

        if !existing.is_owned_by(user.value()) {
            warn!(%post_id, %user, "Rejected edit of another user's post");
            return Err(UpdateHackathonPostError::NotOwner);
        }

        let errors = input.validate();
        if !errors.is_empty() {
            return Err(UpdateHackathonPostError::Invalid(errors));
        }

        self.repository
            .update(post_id, input.into())
            .await
            .map_err(|e| match e {
                // Deleted between the lookup and the update.
                HackathonRepositoryError::NotFound => UpdateHackathonPostError::NotFound,
                other => UpdateHackathonPostError::RepositoryError(other.to_string()),
            })
    }
}
