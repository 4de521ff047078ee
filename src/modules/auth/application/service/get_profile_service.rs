use async_trait::async_trait;
use hub_core::UserProfile;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::incoming::use_cases::{GetProfileError, GetProfileUseCase};
use crate::auth::application::ports::outgoing::UserQuery;

pub struct GetProfileService<Q>
where
    Q: UserQuery,
{
    query: Q,
}

impl<Q> GetProfileService<Q>
where
    Q: UserQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetProfileUseCase for GetProfileService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, user_id: UserId) -> Result<UserProfile, GetProfileError> {
        self.query
            .find_profile(user_id.value())
            .await
            .map_err(|e| GetProfileError::QueryError(e.to_string()))?
            .ok_or(GetProfileError::NotFound)
    }
}
