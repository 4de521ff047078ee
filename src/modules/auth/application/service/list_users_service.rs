use async_trait::async_trait;
use hub_core::query::{FounderParams, FounderQuery};
use hub_core::UserProfile;

use crate::auth::application::ports::incoming::use_cases::{ListUsersError, ListUsersUseCase};
use crate::auth::application::ports::outgoing::UserQuery;

pub struct ListUsersService<Q>
where
    Q: UserQuery,
{
    query: Q,
}

impl<Q> ListUsersService<Q>
where
    Q: UserQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListUsersUseCase for ListUsersService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, params: FounderParams) -> Result<Vec<UserProfile>, ListUsersError> {
        let founder_query = FounderQuery::try_from(params)
            .map_err(|e| ListUsersError::InvalidQuery(e.to_string()))?;

        let users = self
            .query
            .list_profiles()
            .await
            .map_err(|e| ListUsersError::QueryError(e.to_string()))?;

        Ok(founder_query.apply(&users))
    }
}
