use async_trait::async_trait;
use hub_core::requests::{FormInput, HackathonPostInput};
use hub_core::HackathonPost;
use tracing::info;

use crate::auth::application::domain::entities::UserId;
use crate::hackathon::application::ports::incoming::use_cases::{
    CreateHackathonPostError, CreateHackathonPostUseCase,
};
use crate::hackathon::application::ports::outgoing::{
    HackathonRepository, HackathonRepositoryError,
};

pub struct CreateHackathonPostService<R>
where
    R: HackathonRepository,
{
    repository: R,
}

impl<R> CreateHackathonPostService<R>
where
    R: HackathonRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateHackathonPostUseCase for CreateHackathonPostService<R>
where
    R: HackathonRepository + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        input: HackathonPostInput,
    ) -> Result<HackathonPost, CreateHackathonPostError> {
        let errors = input.validate();
        if !errors.is_empty() {
            return Err(CreateHackathonPostError::Invalid(errors));
        }

        let post = self
            .repository
            .create(owner, input.into())
            .await
            .map_err(|e| match e {
                HackathonRepositoryError::UnknownAuthor => CreateHackathonPostError::UnknownAuthor,
                other => CreateHackathonPostError::RepositoryError(other.to_string()),
            })?;

        info!(post_id = %post.id, owner = %owner, "Hackathon post created");
        Ok(post)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hackathon::application::ports::outgoing::HackathonPostData;
    use crate::tests::support::fixtures::{hackathon_input, hackathon_post};
    use chrono::NaiveDate;
    use mockall::{mock, predicate::*};
    use uuid::Uuid;

    mock! {
        pub Repo {}
        #[async_trait]
        impl HackathonRepository for Repo {
            async fn create(
                &self,
                owner: UserId,
                data: HackathonPostData,
            ) -> Result<HackathonPost, HackathonRepositoryError>;
            async fn update(
                &self,
                id: Uuid,
                data: HackathonPostData,
            ) -> Result<HackathonPost, HackathonRepositoryError>;
            async fn delete(&self, id: Uuid) -> Result<(), HackathonRepositoryError>;
        }
    }

    #[tokio::test]
    async fn test_create_stores_post_for_owner() {
        let owner = UserId::from(Uuid::new_v4());
        let mut repo = MockRepo::new();
        repo.expect_create()
            .with(eq(owner), always())
            .times(1)
            .returning(|owner, data| {
                let mut post = hackathon_post(&data.hackathon_name, owner.value());
                post.teammates_required = data.teammates_required;
                Ok(post)
            });

        let service = CreateHackathonPostService::new(repo);
        let post = service.execute(owner, hackathon_input()).await.unwrap();

        assert!(post.is_owned_by(owner.value()));
        assert_eq!(post.hackathon_name, "HackNight");
    }

    #[tokio::test]
    async fn test_missing_fields_never_reach_repository() {
        let service = CreateHackathonPostService::new(MockRepo::new());

        let result = service
            .execute(UserId::from(Uuid::new_v4()), HackathonPostInput::default())
            .await;

        match result {
            Err(CreateHackathonPostError::Invalid(errors)) => {
                assert!(errors.fields().any(|f| f == "hackathonName"));
                assert!(errors.fields().any(|f| f == "startDate"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_end_before_start_is_invalid() {
        let service = CreateHackathonPostService::new(MockRepo::new());
        let mut input = hackathon_input();
        input.start_date = NaiveDate::from_ymd_opt(2024, 6, 5);
        input.end_date = NaiveDate::from_ymd_opt(2024, 6, 1);

        let result = service.execute(UserId::from(Uuid::new_v4()), input).await;

        assert!(matches!(result, Err(CreateHackathonPostError::Invalid(e)) if e.fields().any(|f| f == "endDate")));
    }

    #[tokio::test]
    async fn test_unknown_author_is_reported() {
        let mut repo = MockRepo::new();
        repo.expect_create()
            .returning(|_, _| Err(HackathonRepositoryError::UnknownAuthor));

        let service = CreateHackathonPostService::new(repo);
        let result = service
            .execute(UserId::from(Uuid::new_v4()), hackathon_input())
            .await;

        assert!(matches!(result, Err(CreateHackathonPostError::UnknownAuthor)));
    }
}
