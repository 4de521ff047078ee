//! Request bodies shared by the server routes and the client forms.
//!
//! Every body that backs a form implements [`FormInput`], so the client can
//! build it from the raw form state and the server can re-run the same
//! required-field checks on what it receives.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::entities::{
    ExperienceRange, FounderRole, PostStatus, SalaryRange, UserProfile, UserType,
};
use crate::forms::{
    FieldValue, FormSchema, FormValues, ValidationErrors, HACKATHON_POST, JOB_POSTING,
    MENTOR_APPLICATION, PROFILE, PROMOTION,
};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub trait FormInput: Sized {
    fn schema() -> &'static FormSchema;

    fn form_values(&self) -> FormValues;

    /// Lenient conversion from form state; missing or malformed values
    /// become empty and are caught by [`FormInput::validate`].
    fn from_form_values(values: &FormValues) -> Self;

    fn validate(&self) -> ValidationErrors {
        Self::schema().validate(&self.form_values())
    }
}

// ───── form state accessors ─────

fn text(values: &FormValues, name: &str) -> String {
    values
        .get(name)
        .and_then(FieldValue::as_text)
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}

fn opt_text(values: &FormValues, name: &str) -> Option<String> {
    Some(text(values, name)).filter(|s| !s.is_empty())
}

fn list(values: &FormValues, name: &str) -> Vec<String> {
    values
        .get(name)
        .and_then(FieldValue::as_list)
        .map(<[String]>::to_vec)
        .unwrap_or_default()
}

fn whole_number(values: &FormValues, name: &str) -> Option<u64> {
    values
        .get(name)
        .and_then(FieldValue::as_number)
        .filter(|n| n.is_finite() && *n >= 0.0)
        .map(|n| n.trunc() as u64)
}

fn date(values: &FormValues, name: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&text(values, name), DATE_FORMAT).ok()
}

fn date_text(date: Option<NaiveDate>) -> FieldValue {
    FieldValue::Text(
        date.map(|d| d.format(DATE_FORMAT).to_string())
            .unwrap_or_default(),
    )
}

fn u64_value(value: Option<u64>) -> FieldValue {
    FieldValue::Number(value.map(|n| n as f64))
}

fn insert(values: &mut FormValues, name: &str, value: impl Into<FieldValue>) {
    values.insert(name.to_string(), value.into());
}

// ───── hackathon posts ─────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HackathonPostInput {
    pub hackathon_name: String,
    pub hackathon_link: String,
    pub description: String,
    pub skills: Vec<String>,
    pub location: String,
    pub city: Option<String>,
    pub teammates_required: Option<u32>,
    pub status: Option<PostStatus>,
    pub prize: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl FormInput for HackathonPostInput {
    fn schema() -> &'static FormSchema {
        &HACKATHON_POST
    }

    fn form_values(&self) -> FormValues {
        let mut values = FormValues::new();
        insert(&mut values, "hackathonName", self.hackathon_name.as_str());
        insert(&mut values, "hackathonLink", self.hackathon_link.as_str());
        insert(&mut values, "description", self.description.as_str());
        insert(&mut values, "skills", self.skills.clone());
        insert(&mut values, "location", self.location.as_str());
        insert(&mut values, "city", self.city.clone());
        insert(&mut values, "teammatesRequired", self.teammates_required);
        insert(
            &mut values,
            "status",
            self.status.map(|s| s.as_str()).unwrap_or_default(),
        );
        insert(&mut values, "prize", self.prize.clone());
        values.insert("startDate".to_string(), date_text(self.start_date));
        values.insert("endDate".to_string(), date_text(self.end_date));
        values
    }

    fn from_form_values(values: &FormValues) -> Self {
        Self {
            hackathon_name: text(values, "hackathonName"),
            hackathon_link: text(values, "hackathonLink"),
            description: text(values, "description"),
            skills: list(values, "skills"),
            location: text(values, "location"),
            city: opt_text(values, "city"),
            teammates_required: whole_number(values, "teammatesRequired")
                .and_then(|n| u32::try_from(n).ok()),
            status: opt_text(values, "status").and_then(|s| s.parse().ok()),
            prize: opt_text(values, "prize"),
            start_date: date(values, "startDate"),
            end_date: date(values, "endDate"),
        }
    }

    fn validate(&self) -> ValidationErrors {
        let mut errors = Self::schema().validate(&self.form_values());
        if self.teammates_required == Some(0) {
            errors.insert("teammatesRequired", "Teammates required must be at least 1");
        }
        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            if start > end {
                errors.insert("endDate", "End date must not be before the start date");
            }
        }
        errors
    }
}

// ───── promotions ─────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromotionInput {
    pub title: String,
    pub description: String,
    pub link: String,
}

impl FormInput for PromotionInput {
    fn schema() -> &'static FormSchema {
        &PROMOTION
    }

    fn form_values(&self) -> FormValues {
        let mut values = FormValues::new();
        insert(&mut values, "title", self.title.as_str());
        insert(&mut values, "description", self.description.as_str());
        insert(&mut values, "link", self.link.as_str());
        values
    }

    fn from_form_values(values: &FormValues) -> Self {
        Self {
            title: text(values, "title"),
            description: text(values, "description"),
            link: text(values, "link"),
        }
    }
}

// ───── jobs ─────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobInput {
    pub title: String,
    pub company: String,
    pub description: String,
    pub location: String,
    pub job_type: String,
    pub salary: SalaryRange,
    pub experience: ExperienceRange,
    pub skills: Vec<String>,
    pub apply_link: String,
}

impl FormInput for JobInput {
    fn schema() -> &'static FormSchema {
        &JOB_POSTING
    }

    fn form_values(&self) -> FormValues {
        let mut values = FormValues::new();
        insert(&mut values, "title", self.title.as_str());
        insert(&mut values, "company", self.company.as_str());
        insert(&mut values, "description", self.description.as_str());
        insert(&mut values, "location", self.location.as_str());
        insert(&mut values, "jobType", self.job_type.as_str());
        values.insert("salaryMin".to_string(), u64_value(self.salary.min));
        values.insert("salaryMax".to_string(), u64_value(self.salary.max));
        insert(&mut values, "experienceMin", self.experience.min);
        insert(&mut values, "experienceMax", self.experience.max);
        insert(&mut values, "skills", self.skills.clone());
        insert(&mut values, "applyLink", self.apply_link.as_str());
        values
    }

    fn from_form_values(values: &FormValues) -> Self {
        let years = |name: &str| whole_number(values, name).and_then(|n| u32::try_from(n).ok());
        Self {
            title: text(values, "title"),
            company: text(values, "company"),
            description: text(values, "description"),
            location: text(values, "location"),
            job_type: text(values, "jobType"),
            salary: SalaryRange {
                min: whole_number(values, "salaryMin"),
                max: whole_number(values, "salaryMax"),
            },
            experience: ExperienceRange {
                min: years("experienceMin"),
                max: years("experienceMax"),
            },
            skills: list(values, "skills"),
            apply_link: text(values, "applyLink"),
        }
    }

    fn validate(&self) -> ValidationErrors {
        let mut errors = Self::schema().validate(&self.form_values());
        if let (Some(min), Some(max)) = (self.salary.min, self.salary.max) {
            if min > max {
                errors.insert("salaryMax", "Maximum salary must not be below the minimum");
            }
        }
        if let (Some(min), Some(max)) = (self.experience.min, self.experience.max) {
            if min > max {
                errors.insert(
                    "experienceMax",
                    "Maximum experience must not be below the minimum",
                );
            }
        }
        errors
    }
}

// ───── mentors ─────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MentorApplicationInput {
    pub expertise: Vec<String>,
    pub experience_years: Option<u32>,
    pub bio: String,
    pub linkedin: Option<String>,
    pub availability: String,
}

impl FormInput for MentorApplicationInput {
    fn schema() -> &'static FormSchema {
        &MENTOR_APPLICATION
    }

    fn form_values(&self) -> FormValues {
        let mut values = FormValues::new();
        insert(&mut values, "expertise", self.expertise.clone());
        insert(&mut values, "experienceYears", self.experience_years);
        insert(&mut values, "bio", self.bio.as_str());
        insert(&mut values, "linkedin", self.linkedin.clone());
        insert(&mut values, "availability", self.availability.as_str());
        values
    }

    fn from_form_values(values: &FormValues) -> Self {
        Self {
            expertise: list(values, "expertise"),
            experience_years: whole_number(values, "experienceYears")
                .and_then(|n| u32::try_from(n).ok()),
            bio: text(values, "bio"),
            linkedin: opt_text(values, "linkedin"),
            availability: text(values, "availability"),
        }
    }
}

// ───── profile ─────

/// Profile completion form. Username and email are not editable here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileInput {
    pub full_name: String,
    pub role: Option<FounderRole>,
    pub user_type: Option<UserType>,
    pub location: Option<String>,
    pub skills: Vec<String>,
    pub bio: Option<String>,
    pub profile_picture: Option<String>,
}

impl ProfileInput {
    /// Pre-fills the form from an existing profile.
    pub fn from_profile(profile: &UserProfile) -> Self {
        Self {
            full_name: profile.full_name.clone(),
            role: profile.role,
            user_type: profile.user_type,
            location: profile.location.clone(),
            skills: profile.skills.clone(),
            bio: profile.bio.clone(),
            profile_picture: profile.profile_picture.clone(),
        }
    }

    pub fn apply_to(&self, profile: &mut UserProfile) {
        profile.full_name = self.full_name.trim().to_string();
        profile.role = self.role;
        profile.user_type = self.user_type;
        profile.location = self.location.clone();
        profile.skills = self.skills.clone();
        profile.bio = self.bio.clone();
        profile.profile_picture = self.profile_picture.clone();
    }
}

impl FormInput for ProfileInput {
    fn schema() -> &'static FormSchema {
        &PROFILE
    }

    fn form_values(&self) -> FormValues {
        let mut values = FormValues::new();
        insert(&mut values, "fullName", self.full_name.as_str());
        insert(
            &mut values,
            "role",
            self.role.map(|r| r.as_str()).unwrap_or_default(),
        );
        insert(
            &mut values,
            "userType",
            self.user_type.map(|t| t.as_str()).unwrap_or_default(),
        );
        insert(&mut values, "location", self.location.clone());
        insert(&mut values, "skills", self.skills.clone());
        insert(&mut values, "bio", self.bio.clone());
        insert(&mut values, "profilePicture", self.profile_picture.clone());
        values
    }

    fn from_form_values(values: &FormValues) -> Self {
        Self {
            full_name: text(values, "fullName"),
            role: opt_text(values, "role").and_then(|r| r.parse().ok()),
            user_type: opt_text(values, "userType").and_then(|t| t.parse().ok()),
            location: opt_text(values, "location"),
            skills: list(values, "skills"),
            bio: opt_text(values, "bio"),
            profile_picture: opt_text(values, "profilePicture"),
        }
    }
}

// ───── auth ─────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterInput {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub full_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginOutput {
    pub access_token: String,
    pub user: UserProfile,
}
