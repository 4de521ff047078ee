use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use hub_core::requests::HackathonPostInput;
use hub_core::{HackathonPost, PostStatus};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

/// Column values of a post, already validated and trimmed.
#[derive(Debug, Clone, PartialEq)]
pub struct HackathonPostData {
    pub hackathon_name: String,
    pub hackathon_link: String,
    pub description: String,
    pub skills: Vec<String>,
    pub location: String,
    pub city: Option<String>,
    pub teammates_required: u32,
    pub status: PostStatus,
    pub prize: Option<String>,
    /// Calendar dates are stored at 00:00 UTC.
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

impl From<HackathonPostInput> for HackathonPostData {
    fn from(input: HackathonPostInput) -> Self {
        Self {
            hackathon_name: input.hackathon_name.trim().to_string(),
            hackathon_link: input.hackathon_link.trim().to_string(),
            description: input.description.trim().to_string(),
            skills: input
                .skills
                .iter()
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
            location: input.location.trim().to_string(),
            city: non_blank(input.city),
            teammates_required: input.teammates_required.unwrap_or(1),
            status: input.status.unwrap_or(PostStatus::Open),
            prize: non_blank(input.prize),
            start_date: input.start_date.map(midnight_utc),
            end_date: input.end_date.map(midnight_utc),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn midnight_utc(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum HackathonRepositoryError {
    #[error("Post not found")]
    NotFound,

    /// The author id has no users row.
    #[error("Unknown author")]
    UnknownAuthor,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

/// Write side. Ownership is checked by the caller before `update` and
/// `delete` are reached.
#[async_trait]
pub trait HackathonRepository: Send + Sync {
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
