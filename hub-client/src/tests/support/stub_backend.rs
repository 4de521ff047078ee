use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{NaiveTime, Utc};
use hub_core::jobs::{JobListResponse, JobQuery, Pagination};
use hub_core::query::{FounderParams, HackathonPostParams};
use hub_core::requests::{
    HackathonPostInput, JobInput, LoginInput, LoginOutput, MentorApplicationInput, ProfileInput,
    PromotionInput, RegisterInput,
};
use hub_core::{
    HackathonPost, Job, MentorApplication, MentorStatus, PostAuthor, PostStatus, PromotionPost,
    Reaction, UserProfile,
};
use uuid::Uuid;

use super::fixtures::profile;
use crate::api::BackendApi;
use crate::error::ClientError;

#[derive(Default)]
struct StubState {
    posts: Vec<HackathonPost>,
    users: Vec<UserProfile>,
    promotions: Vec<PromotionPost>,
    jobs: Vec<Job>,
    mentors: Vec<MentorApplication>,
    calls: Vec<&'static str>,
    fail_next: Option<String>,
}

/// In-memory backend that enforces the same rules as the server: bearer
/// tokens are user ids, writes are owner-checked and reactions toggle.
#[derive(Default)]
pub struct StubBackend {
    state: Mutex<StubState>,
}

fn server_error(status: u16, message: &str) -> ClientError {
    ClientError::Server {
        status,
        message: message.to_string(),
    }
}

fn user_of(token: &str) -> Result<Uuid, ClientError> {
    Uuid::parse_str(token).map_err(|_| server_error(401, "Invalid token"))
}

impl StubBackend {
    pub fn with_posts(self, posts: Vec<HackathonPost>) -> Self {
        self.state.lock().unwrap().posts = posts;
        self
    }

    pub fn with_users(self, users: Vec<UserProfile>) -> Self {
        self.state.lock().unwrap().users = users;
        self
    }

    pub fn with_promotions(self, promotions: Vec<PromotionPost>) -> Self {
        self.state.lock().unwrap().promotions = promotions;
        self
    }

    pub fn with_jobs(self, jobs: Vec<Job>) -> Self {
        self.state.lock().unwrap().jobs = jobs;
        self
    }

    /// The next call fails with a 500 carrying `message`.
    pub fn fail_next(&self, message: &str) {
        self.state.lock().unwrap().fail_next = Some(message.to_string());
    }

    pub fn call_count(&self, name: &str) -> usize {
        self.state
            .lock()
            .unwrap()
            .calls
            .iter()
            .filter(|c| **c == name)
            .count()
    }

    pub fn total_calls(&self) -> usize {
        self.state.lock().unwrap().calls.len()
    }

    pub fn promotion(&self, id: Uuid) -> Option<PromotionPost> {
        self.state
            .lock()
            .unwrap()
            .promotions
            .iter()
            .find(|p| p.id == id)
            .cloned()
    }

    fn record(&self, call: &'static str) -> Result<MutexGuard<'_, StubState>, ClientError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(call);
        match state.fail_next.take() {
            Some(message) => Err(server_error(500, &message)),
            None => Ok(state),
        }
    }
}

fn post_from(input: &HackathonPostInput, id: Uuid, author: &UserProfile) -> HackathonPost {
    let at_midnight = |d: chrono::NaiveDate| d.and_time(NaiveTime::MIN).and_utc();
    HackathonPost {
        id,
        hackathon_name: input.hackathon_name.clone(),
        hackathon_link: input.hackathon_link.clone(),
        description: input.description.clone(),
        skills: input.skills.clone(),
        location: input.location.clone(),
        city: input.city.clone(),
        teammates_required: input.teammates_required.unwrap_or(1),
        status: input.status.unwrap_or(PostStatus::Open),
        prize: input.prize.clone(),
        start_date: input.start_date.map(at_midnight),
        end_date: input.end_date.map(at_midnight),
        created_at: Utc::now(),
        user: PostAuthor {
            id: author.id,
            full_name: author.full_name.clone(),
            username: author.username.clone(),
            profile_picture: author.profile_picture.clone(),
            role: author.role,
        },
    }
}

fn find_or_create_user(state: &mut StubState, id: Uuid) -> &mut UserProfile {
    if let Some(index) = state.users.iter().position(|u| u.id == id) {
        return &mut state.users[index];
    }
    let mut user = profile("member");
    user.id = id;
    state.users.push(user);
    let last = state.users.len() - 1;
    &mut state.users[last]
}

#[async_trait]
impl BackendApi for StubBackend {
    async fn register(&self, input: &RegisterInput) -> Result<UserProfile, ClientError> {
        let mut state = self.record("register")?;
        let mut user = profile(&input.username);
        user.full_name = input.full_name.clone();
        state.users.push(user.clone());
        Ok(user)
    }

    async fn login(&self, input: &LoginInput) -> Result<LoginOutput, ClientError> {
        let state = self.record("login")?;
        let user = state
            .users
            .iter()
            .find(|u| input.email.starts_with(&u.username))
            .cloned()
            .ok_or_else(|| server_error(401, "Invalid email or password"))?;
        Ok(LoginOutput {
            access_token: user.id.to_string(),
            user,
        })
    }

    async fn me(&self, token: &str) -> Result<UserProfile, ClientError> {
        let mut state = self.record("me")?;
        let id = user_of(token)?;
        Ok(find_or_create_user(&mut state, id).clone())
    }

    async fn update_profile(
        &self,
        token: &str,
        input: &ProfileInput,
    ) -> Result<UserProfile, ClientError> {
        let mut state = self.record("update_profile")?;
        let id = user_of(token)?;
        let user = find_or_create_user(&mut state, id);
        input.apply_to(user);
        Ok(user.clone())
    }

    async fn list_users(&self, _params: &FounderParams) -> Result<Vec<UserProfile>, ClientError> {
        let state = self.record("list_users")?;
        Ok(state.users.clone())
    }

    async fn list_hackathon_posts(
        &self,
        _params: &HackathonPostParams,
    ) -> Result<Vec<HackathonPost>, ClientError> {
        let state = self.record("list_hackathon_posts")?;
        Ok(state.posts.clone())
    }

    async fn create_hackathon_post(
        &self,
        token: &str,
        input: &HackathonPostInput,
    ) -> Result<HackathonPost, ClientError> {
        let mut state = self.record("create_hackathon_post")?;
        let author = find_or_create_user(&mut state, user_of(token)?).clone();
        let post = post_from(input, Uuid::new_v4(), &author);
        state.posts.push(post.clone());
        Ok(post)
    }

    async fn update_hackathon_post(
        &self,
        token: &str,
        id: Uuid,
        input: &HackathonPostInput,
    ) -> Result<HackathonPost, ClientError> {
        let mut state = self.record("update_hackathon_post")?;
        let user = user_of(token)?;
        let author = find_or_create_user(&mut state, user).clone();
        let post = state
            .posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| server_error(404, "Post not found"))?;
        if !post.is_owned_by(user) {
            return Err(server_error(403, "You can only edit your own posts"));
        }
        let created_at = post.created_at;
        *post = post_from(input, id, &author);
        post.created_at = created_at;
        Ok(post.clone())
    }

    async fn delete_hackathon_post(&self, token: &str, id: Uuid) -> Result<(), ClientError> {
        let mut state = self.record("delete_hackathon_post")?;
        let user = user_of(token)?;
        let post = state
            .posts
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| server_error(404, "Post not found"))?;
        if !post.is_owned_by(user) {
            return Err(server_error(403, "You can only delete your own posts"));
        }
        state.posts.retain(|p| p.id != id);
        Ok(())
    }

    async fn list_promotions(&self) -> Result<Vec<PromotionPost>, ClientError> {
        let state = self.record("list_promotions")?;
        Ok(state.promotions.clone())
    }

    async fn my_promotions(&self, token: &str) -> Result<Vec<PromotionPost>, ClientError> {
        let state = self.record("my_promotions")?;
        let user = user_of(token)?;
        Ok(state
            .promotions
            .iter()
            .filter(|p| p.user == user)
            .cloned()
            .collect())
    }

    async fn create_promotion(
        &self,
        token: &str,
        input: &PromotionInput,
    ) -> Result<PromotionPost, ClientError> {
        let mut state = self.record("create_promotion")?;
        let now = Utc::now();
        let post = PromotionPost {
            id: Uuid::new_v4(),
            title: input.title.clone(),
            description: input.description.clone(),
            link: input.link.clone(),
            likes: vec![],
            dislikes: vec![],
            number_of_likes: 0,
            number_of_dislikes: 0,
            created_at: now,
            updated_at: now,
            user: user_of(token)?,
        };
        state.promotions.insert(0, post.clone());
        Ok(post)
    }

    async fn update_promotion(
        &self,
        token: &str,
        id: Uuid,
        input: &PromotionInput,
    ) -> Result<PromotionPost, ClientError> {
        let mut state = self.record("update_promotion")?;
        let user = user_of(token)?;
        let post = state
            .promotions
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| server_error(404, "Promotion not found"))?;
        if post.user != user {
            return Err(server_error(403, "You can only edit your own promotions"));
        }
        post.title = input.title.clone();
        post.description = input.description.clone();
        post.link = input.link.clone();
        post.updated_at = Utc::now();
        Ok(post.clone())
    }

    async fn delete_promotion(&self, token: &str, id: Uuid) -> Result<(), ClientError> {
        let mut state = self.record("delete_promotion")?;
        let user = user_of(token)?;
        let post = state
            .promotions
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| server_error(404, "Promotion not found"))?;
        if post.user != user {
            return Err(server_error(403, "You can only delete your own promotions"));
        }
        state.promotions.retain(|p| p.id != id);
        Ok(())
    }

    async fn react(
        &self,
        token: &str,
        id: Uuid,
        reaction: Reaction,
    ) -> Result<PromotionPost, ClientError> {
        let mut state = self.record(match reaction {
            Reaction::Like => "like",
            Reaction::Dislike => "dislike",
        })?;
        let user = user_of(token)?;
        let post = state
            .promotions
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| server_error(404, "Promotion not found"))?;
        post.react(user, reaction);
        Ok(post.clone())
    }

    async fn list_jobs(&self, query: &JobQuery) -> Result<JobListResponse, ClientError> {
        let state = self.record("list_jobs")?;
        let matching: Vec<Job> = state
            .jobs
            .iter()
            .filter(|job| {
                query.search_term().map_or(true, |s| {
                    job.title.to_lowercase().contains(&s.to_lowercase())
                })
            })
            .cloned()
            .collect();
        let total = matching.len() as u64;
        let jobs = matching
            .into_iter()
            .skip(query.offset() as usize)
            .take(query.limit() as usize)
            .collect();
        Ok(JobListResponse {
            success: true,
            jobs,
            pagination: Pagination::new(query.page(), query.limit(), total),
        })
    }

    async fn create_job(&self, token: &str, input: &JobInput) -> Result<Job, ClientError> {
        let mut state = self.record("create_job")?;
        let job = Job {
            id: Uuid::new_v4(),
            title: input.title.clone(),
            company: input.company.clone(),
            description: input.description.clone(),
            location: input.location.clone(),
            salary: input.salary,
            job_type: input.job_type.clone(),
            experience: input.experience,
            skills: input.skills.clone(),
            created_at: Utc::now(),
            applicants: vec![],
            apply_link: input.apply_link.clone(),
            posted_by: user_of(token)?,
        };
        state.jobs.insert(0, job.clone());
        Ok(job)
    }

    async fn apply_to_job(&self, token: &str, id: Uuid) -> Result<Job, ClientError> {
        let mut state = self.record("apply_to_job")?;
        let user = user_of(token)?;
        let job = state
            .jobs
            .iter_mut()
            .find(|j| j.id == id)
            .ok_or_else(|| server_error(404, "Job not found"))?;
        if !job.applicants.contains(&user) {
            job.applicants.push(user);
        }
        Ok(job.clone())
    }

    async fn apply_as_mentor(
        &self,
        token: &str,
        input: &MentorApplicationInput,
    ) -> Result<MentorApplication, ClientError> {
        let mut state = self.record("apply_as_mentor")?;
        let user = user_of(token)?;
        if state.mentors.iter().any(|m| m.user == user) {
            return Err(server_error(409, "You have already applied as a mentor"));
        }
        let application = MentorApplication {
            id: Uuid::new_v4(),
            user,
            expertise: input.expertise.clone(),
            experience_years: input.experience_years.unwrap_or_default(),
            bio: input.bio.clone(),
            linkedin: input.linkedin.clone(),
            availability: input.availability.clone(),
            status: MentorStatus::Pending,
            created_at: Utc::now(),
        };
        state.mentors.push(application.clone());
        Ok(application)
    }

    async fn list_mentors(&self) -> Result<Vec<MentorApplication>, ClientError> {
        let state = self.record("list_mentors")?;
        Ok(state.mentors.clone())
    }
}
