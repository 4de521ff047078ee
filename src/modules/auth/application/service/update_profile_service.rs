use async_trait::async_trait;
use hub_core::requests::{FormInput, ProfileInput};
use hub_core::UserProfile;
use tracing::info;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::incoming::use_cases::{
    UpdateProfileError, UpdateProfileUseCase,
};
use crate::auth::application::ports::outgoing::{UserRepository, UserRepositoryError};

pub struct UpdateProfileService<R>
where
    R: UserRepository,
{
    repository: R,
}

impl<R> UpdateProfileService<R>
where
    R: UserRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateProfileUseCase for UpdateProfileService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        user_id: UserId,
        input: ProfileInput,
    ) -> Result<UserProfile, UpdateProfileError> {
        let errors = input.validate();
        if !errors.is_empty() {
            return Err(UpdateProfileError::Invalid(errors));
        }

        let profile = self
            .repository
            .update_profile(user_id, input)
            .await
            .map_err(|e| match e {
                UserRepositoryError::NotFound => UpdateProfileError::NotFound,
                other => UpdateProfileError::RepositoryError(other.to_string()),
            })?;

        info!(%user_id, "Profile updated");
        Ok(profile)
    }
}
