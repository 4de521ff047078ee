//! Shared domain for the builder hub: wire entities, the list-query
//! pipeline, form schemas and the promotion reaction rule.
//!
//! Everything here is pure. The server and the client both depend on it so
//! that a listing filtered on either side yields the same result.

pub mod entities;
pub mod forms;
pub mod jobs;
pub mod query;
pub mod reaction;
pub mod requests;

pub use entities::{
    ExperienceRange, FounderRole, HackathonPost, Job, MentorApplication, MentorStatus,
    PostAuthor, PostStatus, PromotionPost, SalaryRange, UnknownVariant, UserProfile, UserType,
};
pub use reaction::Reaction;
