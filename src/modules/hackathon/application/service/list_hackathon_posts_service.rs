use async_trait::async_trait;
use hub_core::query::{HackathonPostParams, HackathonPostQuery};
use hub_core::HackathonPost;

use crate::auth::application::domain::entities::UserId;
use crate::hackathon::application::ports::incoming::use_cases::{
    ListHackathonPostsError, ListHackathonPostsUseCase,
};
use crate::hackathon::application::ports::outgoing::HackathonQuery;

pub struct ListHackathonPostsService<Q>
where
    Q: HackathonQuery,
{
    query: Q,
}

impl<Q> ListHackathonPostsService<Q>
where
    Q: HackathonQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListHackathonPostsUseCase for ListHackathonPostsService<Q>
where
    Q: HackathonQuery + Send + Sync,
{
    async fn execute(
        &self,
        params: HackathonPostParams,
        viewer: Option<UserId>,
    ) -> Result<Vec<HackathonPost>, ListHackathonPostsError> {
        // Reject bad parameters before touching the database.
        let query = HackathonPostQuery::try_from(params)
            .map_err(|e| ListHackathonPostsError::InvalidQuery(e.to_string()))?;

        let posts = self
            .query
            .list()
            .await
            .map_err(|e| ListHackathonPostsError::QueryError(e.to_string()))?;

        Ok(query.apply(&posts, viewer.as_ref().map(UserId::value)))
    }
}
