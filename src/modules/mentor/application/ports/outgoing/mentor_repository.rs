use async_trait::async_trait;
use hub_core::requests::MentorApplicationInput;
use hub_core::MentorApplication;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MentorApplicationData {
    pub expertise: Vec<String>,
    pub experience_years: u32,
    pub bio: String,
    pub linkedin: Option<String>,
    pub availability: String,
}

impl From<MentorApplicationInput> for MentorApplicationData {
    fn from(input: MentorApplicationInput) -> Self {
        Self {
            expertise: input
                .expertise
                .iter()
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
            experience_years: input.experience_years.unwrap_or_default(),
            bio: input.bio.trim().to_string(),
            linkedin: input
                .linkedin
                .map(|l| l.trim().to_string())
                .filter(|l| !l.is_empty()),
            availability: input.availability.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum MentorRepositoryError {
    #[error("User has already applied")]
    AlreadyApplied,

    #[error("Unknown applicant")]
    UnknownApplicant,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[async_trait]
pub trait MentorRepository: Send + Sync {
    /// Stores a new application with status `Pending`.
    async fn create(
        &self,
        applicant: UserId,
        data: MentorApplicationData,
    ) -> Result<MentorApplication, MentorRepositoryError>;
}
