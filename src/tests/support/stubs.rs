use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;
use hub_core::jobs::{JobQuery, Pagination};
use hub_core::query::{FounderParams, HackathonPostParams};
use hub_core::requests::{
    HackathonPostInput, JobInput, LoginInput, LoginOutput, MentorApplicationInput, ProfileInput,
    PromotionInput, RegisterInput,
};
use hub_core::{
    HackathonPost, Job, MentorApplication, MentorStatus, PostAuthor, PromotionPost, Reaction,
    UserProfile,
};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::incoming::use_cases::{
    GetProfileError, GetProfileUseCase, ListUsersError, ListUsersUseCase, LoginUserError,
    LoginUserUseCase, RegisterUserError, RegisterUserUseCase, UpdateProfileError,
    UpdateProfileUseCase,
};
use crate::hackathon::application::ports::incoming::use_cases::{
    CreateHackathonPostError, CreateHackathonPostUseCase, DeleteHackathonPostError,
    DeleteHackathonPostUseCase, ListHackathonPostsError, ListHackathonPostsUseCase,
    UpdateHackathonPostError, UpdateHackathonPostUseCase,
};
use crate::hackathon::application::ports::outgoing::{
    HackathonPostData, HackathonQuery, HackathonQueryError, HackathonRepository,
    HackathonRepositoryError,
};
use crate::job::application::ports::incoming::use_cases::{
    ApplyToJobError, ApplyToJobUseCase, CreateJobError, CreateJobUseCase, ListJobsError,
    ListJobsUseCase,
};
use crate::job::application::ports::outgoing::{
    JobData, JobPage, JobQueryError, JobRepository, JobRepositoryError, JobSearch,
};
use crate::mentor::application::ports::incoming::use_cases::{
    ApplyAsMentorError, ApplyAsMentorUseCase, ListMentorsError, ListMentorsUseCase,
};
use crate::mentor::application::ports::outgoing::{
    MentorApplicationData, MentorQuery, MentorQueryError, MentorRepository, MentorRepositoryError,
};
use crate::promotion::application::ports::incoming::use_cases::{
    CreatePromotionError, CreatePromotionUseCase, DeletePromotionError, DeletePromotionUseCase,
    ListMyPromotionsUseCase, ListPromotionsError, ListPromotionsUseCase, ReactToPromotionError,
    ReactToPromotionUseCase, UpdatePromotionError, UpdatePromotionUseCase,
};
use crate::promotion::application::ports::outgoing::{
    PromotionData, PromotionQuery, PromotionQueryError, PromotionRepository,
    PromotionRepositoryError,
};

//
// ──────────────────────────────────────────────────────────
// Placeholder use cases
// ──────────────────────────────────────────────────────────
//
// Filled into every `TestAppStateBuilder` slot that a test does not
// override. Reaching one means the handler under test called a use case
// it should not have.

pub struct StubRegisterUserUseCase;

#[async_trait]
impl RegisterUserUseCase for StubRegisterUserUseCase {
    async fn execute(&self, _input: RegisterInput) -> Result<UserProfile, RegisterUserError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubLoginUserUseCase;

#[async_trait]
impl LoginUserUseCase for StubLoginUserUseCase {
    async fn execute(&self, _input: LoginInput) -> Result<LoginOutput, LoginUserError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubListUsersUseCase;

#[async_trait]
impl ListUsersUseCase for StubListUsersUseCase {
    async fn execute(&self, _params: FounderParams) -> Result<Vec<UserProfile>, ListUsersError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubGetProfileUseCase;

#[async_trait]
impl GetProfileUseCase for StubGetProfileUseCase {
    async fn execute(&self, _user_id: UserId) -> Result<UserProfile, GetProfileError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubUpdateProfileUseCase;

#[async_trait]
impl UpdateProfileUseCase for StubUpdateProfileUseCase {
    async fn execute(
        &self,
        _user_id: UserId,
        _input: ProfileInput,
    ) -> Result<UserProfile, UpdateProfileError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubListHackathonPostsUseCase;

#[async_trait]
impl ListHackathonPostsUseCase for StubListHackathonPostsUseCase {
    async fn execute(
        &self,
        _params: HackathonPostParams,
        _viewer: Option<UserId>,
    ) -> Result<Vec<HackathonPost>, ListHackathonPostsError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubCreateHackathonPostUseCase;

#[async_trait]
impl CreateHackathonPostUseCase for StubCreateHackathonPostUseCase {
    async fn execute(
        &self,
        _owner: UserId,
        _input: HackathonPostInput,
    ) -> Result<HackathonPost, CreateHackathonPostError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubUpdateHackathonPostUseCase;

#[async_trait]
impl UpdateHackathonPostUseCase for StubUpdateHackathonPostUseCase {
    async fn execute(
        &self,
        _user: UserId,
        _post_id: Uuid,
        _input: HackathonPostInput,
    ) -> Result<HackathonPost, UpdateHackathonPostError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubDeleteHackathonPostUseCase;

#[async_trait]
impl DeleteHackathonPostUseCase for StubDeleteHackathonPostUseCase {
    async fn execute(&self, _user: UserId, _post_id: Uuid) -> Result<(), DeleteHackathonPostError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubListPromotionsUseCase;

#[async_trait]
impl ListPromotionsUseCase for StubListPromotionsUseCase {
    async fn execute(&self) -> Result<Vec<PromotionPost>, ListPromotionsError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl ListMyPromotionsUseCase for StubListPromotionsUseCase {
    async fn execute(&self, _owner: UserId) -> Result<Vec<PromotionPost>, ListPromotionsError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubCreatePromotionUseCase;

#[async_trait]
impl CreatePromotionUseCase for StubCreatePromotionUseCase {
    async fn execute(
        &self,
        _owner: UserId,
        _input: PromotionInput,
    ) -> Result<PromotionPost, CreatePromotionError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubUpdatePromotionUseCase;

#[async_trait]
impl UpdatePromotionUseCase for StubUpdatePromotionUseCase {
    async fn execute(
        &self,
        _user: UserId,
        _promotion_id: Uuid,
        _input: PromotionInput,
    ) -> Result<PromotionPost, UpdatePromotionError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubDeletePromotionUseCase;

#[async_trait]
impl DeletePromotionUseCase for StubDeletePromotionUseCase {
    async fn execute(&self, _user: UserId, _promotion_id: Uuid) -> Result<(), DeletePromotionError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubReactToPromotionUseCase;

#[async_trait]
impl ReactToPromotionUseCase for StubReactToPromotionUseCase {
    async fn execute(
        &self,
        _user: UserId,
        _promotion_id: Uuid,
        _reaction: Reaction,
    ) -> Result<PromotionPost, ReactToPromotionError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubListJobsUseCase;

#[async_trait]
impl ListJobsUseCase for StubListJobsUseCase {
    async fn execute(&self, _query: JobQuery) -> Result<(Vec<Job>, Pagination), ListJobsError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubCreateJobUseCase;

#[async_trait]
impl CreateJobUseCase for StubCreateJobUseCase {
    async fn execute(&self, _poster: UserId, _input: JobInput) -> Result<Job, CreateJobError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubApplyToJobUseCase;

#[async_trait]
impl ApplyToJobUseCase for StubApplyToJobUseCase {
    async fn execute(&self, _user: UserId, _job_id: Uuid) -> Result<Job, ApplyToJobError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubApplyAsMentorUseCase;

#[async_trait]
impl ApplyAsMentorUseCase for StubApplyAsMentorUseCase {
    async fn execute(
        &self,
        _applicant: UserId,
        _input: MentorApplicationInput,
    ) -> Result<MentorApplication, ApplyAsMentorError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubListMentorsUseCase;

#[async_trait]
impl ListMentorsUseCase for StubListMentorsUseCase {
    async fn execute(&self) -> Result<Vec<MentorApplication>, ListMentorsError> {
        unimplemented!("Not used in this test")
    }
}

//
// ──────────────────────────────────────────────────────────
// In-memory stores
// ──────────────────────────────────────────────────────────
//
// Each store implements both the read and the write port of its module so
// route tests can run the real services end to end. Clones share state.

fn locked<T>(items: &Arc<Mutex<Vec<T>>>) -> MutexGuard<'_, Vec<T>> {
    items.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn newest_first<T>(mut items: Vec<T>, created_at: impl Fn(&T) -> chrono::DateTime<Utc>) -> Vec<T> {
    items.sort_by(|a, b| created_at(b).cmp(&created_at(a)));
    items
}

// ───── hackathon posts ─────

#[derive(Clone, Default)]
pub struct InMemoryHackathonRepository {
    posts: Arc<Mutex<Vec<HackathonPost>>>,
}

impl InMemoryHackathonRepository {
    pub fn with_posts(posts: Vec<HackathonPost>) -> Self {
        Self {
            posts: Arc::new(Mutex::new(posts)),
        }
    }

    pub fn len(&self) -> usize {
        locked(&self.posts).len()
    }
}

fn apply_hackathon_data(post: &mut HackathonPost, data: HackathonPostData) {
    post.hackathon_name = data.hackathon_name;
    post.hackathon_link = data.hackathon_link;
    post.description = data.description;
    post.skills = data.skills;
    post.location = data.location;
    post.city = data.city;
    post.teammates_required = data.teammates_required;
    post.status = data.status;
    post.prize = data.prize;
    post.start_date = data.start_date;
    post.end_date = data.end_date;
}

#[async_trait]
impl HackathonQuery for InMemoryHackathonRepository {
    async fn list(&self) -> Result<Vec<HackathonPost>, HackathonQueryError> {
        Ok(locked(&self.posts).clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<HackathonPost>, HackathonQueryError> {
        Ok(locked(&self.posts).iter().find(|p| p.id == id).cloned())
    }
}

#[async_trait]
impl HackathonRepository for InMemoryHackathonRepository {
    async fn create(
        &self,
        owner: UserId,
        data: HackathonPostData,
    ) -> Result<HackathonPost, HackathonRepositoryError> {
        let owner = owner.value();
        let mut post = HackathonPost {
            id: Uuid::new_v4(),
            hackathon_name: String::new(),
            hackathon_link: String::new(),
            description: String::new(),
            skills: Vec::new(),
            location: String::new(),
            city: None,
            teammates_required: 1,
            status: data.status,
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
        };
        apply_hackathon_data(&mut post, data);
        locked(&self.posts).push(post.clone());
        Ok(post)
    }

    async fn update(
        &self,
        id: Uuid,
        data: HackathonPostData,
    ) -> Result<HackathonPost, HackathonRepositoryError> {
        let mut posts = locked(&self.posts);
        let post = posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(HackathonRepositoryError::NotFound)?;
        apply_hackathon_data(post, data);
        Ok(post.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), HackathonRepositoryError> {
        let mut posts = locked(&self.posts);
        let before = posts.len();
        posts.retain(|p| p.id != id);
        if posts.len() == before {
            return Err(HackathonRepositoryError::NotFound);
        }
        Ok(())
    }
}

// ───── promotions ─────

#[derive(Clone, Default)]
pub struct InMemoryPromotionStore {
    posts: Arc<Mutex<Vec<PromotionPost>>>,
}

impl InMemoryPromotionStore {
    pub fn with_posts(posts: Vec<PromotionPost>) -> Self {
        Self {
            posts: Arc::new(Mutex::new(posts)),
        }
    }

    pub fn len(&self) -> usize {
        locked(&self.posts).len()
    }
}

#[async_trait]
impl PromotionQuery for InMemoryPromotionStore {
    async fn list_all(&self) -> Result<Vec<PromotionPost>, PromotionQueryError> {
        Ok(newest_first(locked(&self.posts).clone(), |p| p.created_at))
    }

    async fn list_by_owner(&self, owner: UserId) -> Result<Vec<PromotionPost>, PromotionQueryError> {
        let mine = locked(&self.posts)
            .iter()
            .filter(|p| p.user == owner.value())
            .cloned()
            .collect();
        Ok(newest_first(mine, |p| p.created_at))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<PromotionPost>, PromotionQueryError> {
        Ok(locked(&self.posts).iter().find(|p| p.id == id).cloned())
    }
}

#[async_trait]
impl PromotionRepository for InMemoryPromotionStore {
    async fn create(
        &self,
        owner: UserId,
        data: PromotionData,
    ) -> Result<PromotionPost, PromotionRepositoryError> {
        let now = Utc::now();
        let post = PromotionPost {
            id: Uuid::new_v4(),
            title: data.title,
            description: data.description,
            link: data.link,
            likes: Vec::new(),
            dislikes: Vec::new(),
            number_of_likes: 0,
            number_of_dislikes: 0,
            created_at: now,
            updated_at: now,
            user: owner.value(),
        };
        locked(&self.posts).push(post.clone());
        Ok(post)
    }

    async fn update(
        &self,
        id: Uuid,
        data: PromotionData,
    ) -> Result<PromotionPost, PromotionRepositoryError> {
        let mut posts = locked(&self.posts);
        let post = posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(PromotionRepositoryError::NotFound)?;
        post.title = data.title;
        post.description = data.description;
        post.link = data.link;
        post.updated_at = Utc::now();
        Ok(post.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), PromotionRepositoryError> {
        let mut posts = locked(&self.posts);
        let before = posts.len();
        posts.retain(|p| p.id != id);
        if posts.len() == before {
            return Err(PromotionRepositoryError::NotFound);
        }
        Ok(())
    }

    async fn react(
        &self,
        id: Uuid,
        user: UserId,
        reaction: Reaction,
    ) -> Result<PromotionPost, PromotionRepositoryError> {
        let mut posts = locked(&self.posts);
        let post = posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(PromotionRepositoryError::NotFound)?;
        post.react(user.value(), reaction);
        post.updated_at = Utc::now();
        Ok(post.clone())
    }
}

// ───── jobs ─────

#[derive(Clone, Default)]
pub struct InMemoryJobStore {
    jobs: Arc<Mutex<Vec<Job>>>,
}

impl InMemoryJobStore {
    pub fn with_jobs(jobs: Vec<Job>) -> Self {
        Self {
            jobs: Arc::new(Mutex::new(jobs)),
        }
    }
}

fn job_matches(job: &Job, query: &JobQuery) -> bool {
    let search = query.search_term().map(str::to_lowercase);
    let location = query.location_term().map(str::to_lowercase);
    let job_type = query.job_type_term().map(str::to_lowercase);

    search.map_or(true, |term| {
        job.title.to_lowercase().contains(&term)
            || job.company.to_lowercase().contains(&term)
            || job.skills.iter().any(|s| s.to_lowercase().contains(&term))
    }) && location.map_or(true, |term| job.location.to_lowercase().contains(&term))
        && job_type.map_or(true, |term| job.job_type.to_lowercase() == term)
        && query
            .experience
            .map_or(true, |years| job.experience.contains(years))
}

#[async_trait]
impl JobSearch for InMemoryJobStore {
    async fn search(&self, query: &JobQuery) -> Result<JobPage, JobQueryError> {
        let matching: Vec<Job> = locked(&self.jobs)
            .iter()
            .filter(|job| job_matches(job, query))
            .cloned()
            .collect();
        let total = matching.len() as u64;
        let jobs = newest_first(matching, |j| j.created_at)
            .into_iter()
            .skip(query.offset() as usize)
            .take(query.limit() as usize)
            .collect();
        Ok(JobPage { jobs, total })
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Job>, JobQueryError> {
        Ok(locked(&self.jobs).iter().find(|j| j.id == id).cloned())
    }
}

#[async_trait]
impl JobRepository for InMemoryJobStore {
    async fn create(&self, poster: UserId, data: JobData) -> Result<Job, JobRepositoryError> {
        let job = Job {
            id: Uuid::new_v4(),
            title: data.title,
            company: data.company,
            description: data.description,
            location: data.location,
            salary: data.salary,
            job_type: data.job_type,
            experience: data.experience,
            skills: data.skills,
            created_at: Utc::now(),
            applicants: Vec::new(),
            apply_link: data.apply_link,
            posted_by: poster.value(),
        };
        locked(&self.jobs).push(job.clone());
        Ok(job)
    }

    async fn add_applicant(&self, id: Uuid, user: UserId) -> Result<Job, JobRepositoryError> {
        let mut jobs = locked(&self.jobs);
        let job = jobs
            .iter_mut()
            .find(|j| j.id == id)
            .ok_or(JobRepositoryError::NotFound)?;
        if !job.applicants.contains(&user.value()) {
            job.applicants.push(user.value());
        }
        Ok(job.clone())
    }
}

// ───── mentors ─────

#[derive(Clone, Default)]
pub struct InMemoryMentorStore {
    applications: Arc<Mutex<Vec<MentorApplication>>>,
}

impl InMemoryMentorStore {
    pub fn with_applications(applications: Vec<MentorApplication>) -> Self {
        Self {
            applications: Arc::new(Mutex::new(applications)),
        }
    }
}

#[async_trait]
impl MentorQuery for InMemoryMentorStore {
    async fn list_visible(&self) -> Result<Vec<MentorApplication>, MentorQueryError> {
        let visible = locked(&self.applications)
            .iter()
            .filter(|a| a.status != MentorStatus::Rejected)
            .cloned()
            .collect();
        Ok(newest_first(visible, |a| a.created_at))
    }
}

#[async_trait]
impl MentorRepository for InMemoryMentorStore {
    async fn create(
        &self,
        applicant: UserId,
        data: MentorApplicationData,
    ) -> Result<MentorApplication, MentorRepositoryError> {
        let mut applications = locked(&self.applications);
        if applications.iter().any(|a| a.user == applicant.value()) {
            return Err(MentorRepositoryError::AlreadyApplied);
        }
        let application = MentorApplication {
            id: Uuid::new_v4(),
            user: applicant.value(),
            expertise: data.expertise,
            experience_years: data.experience_years,
            bio: data.bio,
            linkedin: data.linkedin,
            availability: data.availability,
            status: MentorStatus::Pending,
            created_at: Utc::now(),
        };
        applications.push(application.clone());
        Ok(application)
    }
}
