use async_trait::async_trait;
use hub_core::requests::{FormInput, MentorApplicationInput};
use hub_core::MentorApplication;
use tracing::{info, warn};

use crate::auth::application::domain::entities::UserId;
use crate::mentor::application::ports::incoming::use_cases::{
    ApplyAsMentorError, ApplyAsMentorUseCase,
};
use crate::mentor::application::ports::outgoing::{MentorRepository, MentorRepositoryError};

pub struct ApplyAsMentorService<R>
where
    R: MentorRepository,
{
    repository: R,
}

impl<R> ApplyAsMentorService<R>
where
    R: MentorRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ApplyAsMentorUseCase for ApplyAsMentorService<R>
where
    R: MentorRepository + Send + Sync,
{
    async fn execute(
        &self,
        applicant: UserId,
        input: MentorApplicationInput,
    ) -> Result<MentorApplication, ApplyAsMentorError> {
        let errors = input.validate();
        if !errors.is_empty() {
            return Err(ApplyAsMentorError::Invalid(errors));
        }

        match self.repository.create(applicant, input.into()).await {
            Ok(application) => {
                info!(application_id = %application.id, %applicant, "Mentor application received");
                Ok(application)
            }
            Err(MentorRepositoryError::AlreadyApplied) => {
                warn!(%applicant, "Duplicate mentor application");
                Err(ApplyAsMentorError::AlreadyApplied)
            }
            Err(MentorRepositoryError::UnknownApplicant) => {
                Err(ApplyAsMentorError::UnknownApplicant)
            }
            Err(other) => Err(ApplyAsMentorError::RepositoryError(other.to_string())),
        }
    }
}
