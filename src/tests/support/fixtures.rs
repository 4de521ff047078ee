//! Canned domain values and database rows shared by the module tests.

use chrono::{NaiveDate, TimeZone, Utc};
use hub_core::requests::{HackathonPostInput, JobInput, MentorApplicationInput, PromotionInput};
use hub_core::{
    ExperienceRange, HackathonPost, Job, MentorApplication, MentorStatus, PostAuthor, PostStatus,
    PromotionPost, SalaryRange, UserProfile,
};
use sea_orm::prelude::DateTimeWithTimeZone;
use serde_json::json;
use uuid::Uuid;

use crate::auth::adapter::outgoing::sea_orm_entity::users;
use crate::hackathon::adapter::outgoing::sea_orm_entity::hackathon_posts;
use crate::job::adapter::outgoing::sea_orm_entity::jobs;
use crate::mentor::adapter::outgoing::sea_orm_entity::mentor_applications;
use crate::promotion::adapter::outgoing::sea_orm_entity::promotions;

fn now() -> DateTimeWithTimeZone {
    Utc::now().fixed_offset()
}

// ───── users ─────

pub fn user_profile(username: &str) -> UserProfile {
    UserProfile {
        id: Uuid::new_v4(),
        full_name: String::new(),
        username: username.to_string(),
        role: None,
        user_type: None,
        location: None,
        skills: Vec::new(),
        bio: None,
        created_at: Utc::now(),
        profile_picture: None,
    }
}

pub fn user_row(username: &str) -> users::Model {
    users::Model {
        id: Uuid::new_v4(),
        username: username.to_string(),
        email: format!("{}@example.com", username),
        password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdHNhbHQ$aGFzaGhhc2g".to_string(),
        full_name: String::new(),
        role: None,
        user_type: None,
        location: None,
        skills: json!([]),
        bio: None,
        profile_picture: None,
        created_at: now(),
        updated_at: now(),
    }
}

// ───── hackathon posts ─────

pub fn hackathon_post(name: &str, owner: Uuid) -> HackathonPost {
    HackathonPost {
        id: Uuid::new_v4(),
        hackathon_name: name.to_string(),
        hackathon_link: "https://devpost.com/hacknight".to_string(),
        description: "Looking for teammates".to_string(),
        skills: vec!["rust".to_string()],
        location: "Online".to_string(),
        city: None,
        teammates_required: 2,
        status: PostStatus::Open,
        prize: None,
        start_date: None,
        end_date: None,
        created_at: Utc::now(),
        user: PostAuthor {
            id: owner,
            full_name: String::new(),
            username: format!("user-{}", &owner.simple().to_string()[..8]),
            profile_picture: None,
            role: None,
        },
    }
}

pub fn hackathon_input() -> HackathonPostInput {
    HackathonPostInput {
        hackathon_name: "HackNight".to_string(),
        hackathon_link: "https://devpost.com/hacknight".to_string(),
        description: "Need a designer".to_string(),
        skills: vec!["figma".to_string()],
        location: "Online".to_string(),
        city: None,
        teammates_required: Some(3),
        status: None,
        prize: None,
        start_date: NaiveDate::from_ymd_opt(2024, 6, 1),
        end_date: NaiveDate::from_ymd_opt(2024, 6, 2),
    }
}

pub fn hackathon_row(name: &str, user_id: Uuid) -> hackathon_posts::Model {
    hackathon_posts::Model {
        id: Uuid::new_v4(),
        user_id,
        hackathon_name: name.to_string(),
        hackathon_link: "https://devpost.com/hacknight".to_string(),
        description: "Looking for teammates".to_string(),
        skills: json!(["rust"]),
        location: "Online".to_string(),
        city: None,
        teammates_required: 2,
        status: "Open".to_string(),
        prize: None,
        start_date: Some(Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap().fixed_offset()),
        end_date: None,
        created_at: now(),
        updated_at: now(),
    }
}

// ───── promotions ─────

pub fn promotion(title: &str, owner: Uuid) -> PromotionPost {
    PromotionPost {
        id: Uuid::new_v4(),
        title: title.to_string(),
        description: "Come take a look".to_string(),
        link: "https://example.com".to_string(),
        likes: Vec::new(),
        dislikes: Vec::new(),
        number_of_likes: 0,
        number_of_dislikes: 0,
        created_at: Utc::now(),
        updated_at: Utc::now(),
        user: owner,
    }
}

pub fn promotion_input() -> PromotionInput {
    PromotionInput {
        title: "Launch".to_string(),
        description: "We shipped".to_string(),
        link: "https://example.com".to_string(),
    }
}

pub fn promotion_row(title: &str, user_id: Uuid) -> promotions::Model {
    promotions::Model {
        id: Uuid::new_v4(),
        user_id,
        title: title.to_string(),
        description: "Come take a look".to_string(),
        link: "https://example.com".to_string(),
        likes: json!([]),
        dislikes: json!([]),
        number_of_likes: 0,
        number_of_dislikes: 0,
        created_at: now(),
        updated_at: now(),
    }
}

// ───── jobs ─────

pub fn job(title: &str, poster: Uuid) -> Job {
    Job {
        id: Uuid::new_v4(),
        title: title.to_string(),
        company: "Acme".to_string(),
        description: "Help us build things".to_string(),
        location: "Remote".to_string(),
        salary: SalaryRange::default(),
        job_type: "Full-time".to_string(),
        experience: ExperienceRange::default(),
        skills: vec!["communication".to_string()],
        created_at: Utc::now(),
        applicants: Vec::new(),
        apply_link: "https://acme.example/jobs".to_string(),
        posted_by: poster,
    }
}

pub fn job_input() -> JobInput {
    JobInput {
        title: "Rust Engineer".to_string(),
        company: "Ferrous".to_string(),
        description: "Build the hub".to_string(),
        location: "Remote".to_string(),
        job_type: "Full-time".to_string(),
        salary: SalaryRange {
            min: Some(90_000),
            max: Some(120_000),
        },
        experience: ExperienceRange {
            min: Some(2),
            max: None,
        },
        skills: vec!["rust".to_string(), "postgres".to_string()],
        apply_link: "https://ferrous.dev/jobs/1".to_string(),
    }
}

pub fn job_row(title: &str, poster: Uuid) -> jobs::Model {
    jobs::Model {
        id: Uuid::new_v4(),
        posted_by: poster,
        title: title.to_string(),
        company: "Acme".to_string(),
        description: "Help us build things".to_string(),
        location: "Remote".to_string(),
        job_type: "Full-time".to_string(),
        salary_min: Some(90_000),
        salary_max: None,
        experience_min: Some(2),
        experience_max: Some(5),
        skills: json!(["rust"]),
        applicants: json!([]),
        apply_link: "https://acme.example/jobs".to_string(),
        created_at: now(),
        updated_at: now(),
    }
}

// ───── mentors ─────

pub fn mentor_application(user: Uuid) -> MentorApplication {
    MentorApplication {
        id: Uuid::new_v4(),
        user,
        expertise: vec!["rust".to_string()],
        experience_years: 6,
        bio: "Systems programmer".to_string(),
        linkedin: None,
        availability: "Weekends".to_string(),
        status: MentorStatus::Pending,
        created_at: Utc::now(),
    }
}

pub fn mentor_input() -> MentorApplicationInput {
    MentorApplicationInput {
        expertise: vec!["rust".to_string(), "databases".to_string()],
        experience_years: Some(6),
        bio: "Systems programmer".to_string(),
        linkedin: None,
        availability: "Weekends".to_string(),
    }
}

pub fn mentor_row(user: Uuid) -> mentor_applications::Model {
    mentor_applications::Model {
        id: Uuid::new_v4(),
        user_id: user,
        expertise: json!(["rust"]),
        experience_years: 6,
        bio: "Systems programmer".to_string(),
        linkedin: None,
        availability: "Weekends".to_string(),
        status: "Pending".to_string(),
        created_at: now(),
        updated_at: now(),
    }
}
