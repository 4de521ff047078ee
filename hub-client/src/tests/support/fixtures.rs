use chrono::{TimeZone, Utc};
use hub_core::{
    ExperienceRange, HackathonPost, Job, PostAuthor, PostStatus, PromotionPost, SalaryRange,
    UserProfile,
};
use uuid::Uuid;

use crate::session::{SessionAction, SessionStore};

pub fn profile(username: &str) -> UserProfile {
    UserProfile {
        id: Uuid::new_v4(),
        full_name: String::new(),
        username: username.to_string(),
        role: None,
        user_type: None,
        location: None,
        skills: vec![],
        bio: None,
        created_at: Utc::now(),
        profile_picture: None,
    }
}

/// The stub backend accepts the user id as the bearer token.
pub fn signed_in_as(user: &UserProfile) -> SessionStore {
    let mut session = SessionStore::new();
    session.dispatch(SessionAction::SignIn {
        user: user.clone(),
        token: user.id.to_string(),
    });
    session
}

pub fn signed_in(username: &str) -> SessionStore {
    signed_in_as(&profile(username))
}

pub fn hackathon_post(name: &str, owner: &UserProfile, created_day: u32) -> HackathonPost {
    HackathonPost {
        id: Uuid::new_v4(),
        hackathon_name: name.to_string(),
        hackathon_link: "https://devpost.com".to_string(),
        description: format!("{name} needs builders"),
        skills: vec![],
        location: "Online".to_string(),
        city: None,
        teammates_required: 2,
        status: PostStatus::Open,
        prize: None,
        start_date: None,
        end_date: None,
        created_at: Utc.with_ymd_and_hms(2024, 5, created_day, 9, 0, 0).unwrap(),
        user: PostAuthor {
            id: owner.id,
            full_name: owner.full_name.clone(),
            username: owner.username.clone(),
            profile_picture: None,
            role: owner.role,
        },
    }
}

pub fn promotion(title: &str, owner: Uuid) -> PromotionPost {
    PromotionPost {
        id: Uuid::new_v4(),
        title: title.to_string(),
        description: format!("{title} description"),
        link: "https://example.com".to_string(),
        likes: vec![],
        dislikes: vec![],
        number_of_likes: 0,
        number_of_dislikes: 0,
        created_at: Utc::now(),
        updated_at: Utc::now(),
        user: owner,
    }
}

pub fn job(title: &str) -> Job {
    Job {
        id: Uuid::new_v4(),
        title: title.to_string(),
        company: "Acme".to_string(),
        description: "Build things".to_string(),
        location: "Remote".to_string(),
        salary: SalaryRange::default(),
        job_type: "Full-time".to_string(),
        experience: ExperienceRange::default(),
        skills: vec!["rust".to_string()],
        created_at: Utc::now(),
        applicants: vec![],
        apply_link: "https://acme.dev/jobs".to_string(),
        posted_by: Uuid::new_v4(),
    }
}
