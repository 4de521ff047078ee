use async_trait::async_trait;
use hub_core::MentorApplication;

use crate::mentor::application::ports::incoming::use_cases::{
    ListMentorsError, ListMentorsUseCase,
};
use crate::mentor::application::ports::outgoing::MentorQuery;

pub struct ListMentorsService<Q>
where
    Q: MentorQuery,
{
    query: Q,
}

impl<Q> ListMentorsService<Q>
where
    Q: MentorQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListMentorsUseCase for ListMentorsService<Q>
where
    Q: MentorQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<MentorApplication>, ListMentorsError> {
        self.query
            .list_visible()
            .await
            .map_err(|e| ListMentorsError::QueryError(e.to_string()))
    }
}
