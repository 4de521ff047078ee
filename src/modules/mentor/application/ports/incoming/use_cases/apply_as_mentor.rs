use async_trait::async_trait;
use hub_core::forms::ValidationErrors;
use hub_core::requests::MentorApplicationInput;
use hub_core::MentorApplication;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ApplyAsMentorError {
    #[error("Invalid application: {}", .0.summary())]
    Invalid(ValidationErrors),

    #[error("You have already applied to become a mentor")]
    AlreadyApplied,

    #[error("Unknown applicant")]
    UnknownApplicant,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ApplyAsMentorUseCase: Send + Sync {
    async fn execute(
        &self,
        applicant: UserId,
        input: MentorApplicationInput,
    ) -> Result<MentorApplication, ApplyAsMentorError>;
}
