use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

//
// ──────────────────────────────────────────────────────────
// Enumerations
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownVariant {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PostStatus {
    Open,
    Full,
    #[serde(rename = "In Progress")]
    InProgress,
}

impl PostStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostStatus::Open => "Open",
            PostStatus::Full => "Full",
            PostStatus::InProgress => "In Progress",
        }
    }
}

impl FromStr for PostStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "open" => Ok(PostStatus::Open),
            "full" => Ok(PostStatus::Full),
            "in progress" | "in-progress" | "inprogress" => Ok(PostStatus::InProgress),
            _ => Err(UnknownVariant::new("post status", s)),
        }
    }
}

impl fmt::Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FounderRole {
    Founder,
    #[serde(rename = "Co-Founder")]
    CoFounder,
    Hustler,
}

impl FounderRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            FounderRole::Founder => "Founder",
            FounderRole::CoFounder => "Co-Founder",
            FounderRole::Hustler => "Hustler",
        }
    }
}

impl FromStr for FounderRole {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "founder" => Ok(FounderRole::Founder),
            "co-founder" | "cofounder" => Ok(FounderRole::CoFounder),
            "hustler" => Ok(FounderRole::Hustler),
            _ => Err(UnknownVariant::new("role", s)),
        }
    }
}

impl fmt::Display for FounderRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserType {
    Student,
    #[serde(rename = "Working Professional")]
    WorkingProfessional,
}

impl UserType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Student => "Student",
            UserType::WorkingProfessional => "Working Professional",
        }
    }
}

impl FromStr for UserType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "student" => Ok(UserType::Student),
            "working professional" | "working-professional" => Ok(UserType::WorkingProfessional),
            _ => Err(UnknownVariant::new("user type", s)),
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MentorStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl MentorStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MentorStatus::Pending => "Pending",
            MentorStatus::Approved => "Approved",
            MentorStatus::Rejected => "Rejected",
        }
    }
}

impl FromStr for MentorStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(MentorStatus::Pending),
            "approved" => Ok(MentorStatus::Approved),
            "rejected" => Ok(MentorStatus::Rejected),
            _ => Err(UnknownVariant::new("mentor status", s)),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Hackathon posts
// ──────────────────────────────────────────────────────────
//

/// Author summary embedded in every hackathon post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostAuthor {
    #[serde(rename = "_id")]
    pub id: Uuid,
    #[serde(default)]
    pub full_name: String,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<FounderRole>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HackathonPost {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub hackathon_name: String,
    #[serde(default)]
    pub hackathon_link: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub skills: Vec<String>,
    /// Free text; canonical values are `Online`, `Offline` and `Hybrid`.
    #[serde(default)]
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    pub teammates_required: u32,
    pub status: PostStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prize: Option<String>,
    #[serde(default)]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub user: PostAuthor,
}

impl HackathonPost {
    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.user.id == user_id
    }
}

//
// ──────────────────────────────────────────────────────────
// Founder directory
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(rename = "_id")]
    pub id: Uuid,
    #[serde(default)]
    pub full_name: String,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<FounderRole>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_type: Option<UserType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
}

impl UserProfile {
    /// Name shown on cards: the full name, or the username when blank.
    pub fn display_name(&self) -> &str {
        if self.full_name.trim().is_empty() {
            &self.username
        } else {
            &self.full_name
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Promotions
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromotionPost {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub likes: Vec<Uuid>,
    #[serde(default)]
    pub dislikes: Vec<Uuid>,
    #[serde(default)]
    pub number_of_likes: u32,
    #[serde(default)]
    pub number_of_dislikes: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Owner id.
    pub user: Uuid,
}

//
// ──────────────────────────────────────────────────────────
// Jobs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SalaryRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<u64>,
}

/// Years of experience; open ends are allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExperienceRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
}

impl ExperienceRange {
    pub fn contains(&self, years: u32) -> bool {
        self.min.map_or(true, |min| min <= years) && self.max.map_or(true, |max| years <= max)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub salary: SalaryRange,
    #[serde(default)]
    pub job_type: String,
    #[serde(default)]
    pub experience: ExperienceRange,
    #[serde(default)]
    pub skills: Vec<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub applicants: Vec<Uuid>,
    #[serde(default)]
    pub apply_link: String,
    pub posted_by: Uuid,
}

//
// ──────────────────────────────────────────────────────────
// Mentors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MentorApplication {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub user: Uuid,
    #[serde(default)]
    pub expertise: Vec<String>,
    pub experience_years: u32,
    #[serde(default)]
    pub bio: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub availability: String,
    #[serde(default)]
    pub status: MentorStatus,
    pub created_at: DateTime<Utc>,
}
