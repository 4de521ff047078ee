use std::sync::Arc;

use actix_web::web;

use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::ports::incoming::use_cases::{
    GetProfileUseCase, ListUsersUseCase, LoginUserUseCase, RegisterUserUseCase,
    UpdateProfileUseCase,
};
use crate::hackathon::application::hackathon_use_cases::HackathonUseCases;
use crate::hackathon::application::ports::incoming::use_cases::{
    CreateHackathonPostUseCase, DeleteHackathonPostUseCase, ListHackathonPostsUseCase,
    UpdateHackathonPostUseCase,
};
use crate::job::application::job_use_cases::JobUseCases;
use crate::job::application::ports::incoming::use_cases::{
    ApplyToJobUseCase, CreateJobUseCase, ListJobsUseCase,
};
use crate::mentor::application::mentor_use_cases::MentorUseCases;
use crate::mentor::application::ports::incoming::use_cases::{
    ApplyAsMentorUseCase, ListMentorsUseCase,
};
use crate::promotion::application::ports::incoming::use_cases::{
    CreatePromotionUseCase, DeletePromotionUseCase, ListMyPromotionsUseCase,
    ListPromotionsUseCase, ReactToPromotionUseCase, UpdatePromotionUseCase,
};
use crate::promotion::application::promotion_use_cases::PromotionUseCases;
use crate::tests::support::stubs::*;
use crate::AppState;

/// Builds an `AppState` where every use case is a placeholder unless the
/// test swaps in its own.
pub struct TestAppStateBuilder {
    auth: AuthUseCases,
    hackathon: HackathonUseCases,
    promotion: PromotionUseCases,
    job: JobUseCases,
    mentor: MentorUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            auth: AuthUseCases {
                register: Arc::new(StubRegisterUserUseCase),
                login: Arc::new(StubLoginUserUseCase),
                list_users: Arc::new(StubListUsersUseCase),
                get_profile: Arc::new(StubGetProfileUseCase),
                update_profile: Arc::new(StubUpdateProfileUseCase),
            },
            hackathon: HackathonUseCases {
                list: Arc::new(StubListHackathonPostsUseCase),
                create: Arc::new(StubCreateHackathonPostUseCase),
                update: Arc::new(StubUpdateHackathonPostUseCase),
                delete: Arc::new(StubDeleteHackathonPostUseCase),
            },
            promotion: PromotionUseCases {
                list_all: Arc::new(StubListPromotionsUseCase),
                list_mine: Arc::new(StubListPromotionsUseCase),
                create: Arc::new(StubCreatePromotionUseCase),
                update: Arc::new(StubUpdatePromotionUseCase),
                delete: Arc::new(StubDeletePromotionUseCase),
                react: Arc::new(StubReactToPromotionUseCase),
            },
            job: JobUseCases {
                list: Arc::new(StubListJobsUseCase),
                create: Arc::new(StubCreateJobUseCase),
                apply: Arc::new(StubApplyToJobUseCase),
            },
            mentor: MentorUseCases {
                apply: Arc::new(StubApplyAsMentorUseCase),
                list: Arc::new(StubListMentorsUseCase),
            },
        }
    }
}

impl TestAppStateBuilder {
    // ───── auth ─────

    pub fn with_register_user(
        mut self,
        uc: impl RegisterUserUseCase + Send + Sync + 'static,
    ) -> Self {
        self.auth.register = Arc::new(uc);
        self
    }

    pub fn with_login_user(mut self, uc: impl LoginUserUseCase + Send + Sync + 'static) -> Self {
        self.auth.login = Arc::new(uc);
        self
    }

    pub fn with_list_users(mut self, uc: impl ListUsersUseCase + Send + Sync + 'static) -> Self {
        self.auth.list_users = Arc::new(uc);
        self
    }

    pub fn with_get_profile(mut self, uc: impl GetProfileUseCase + Send + Sync + 'static) -> Self {
        self.auth.get_profile = Arc::new(uc);
        self
    }

    pub fn with_update_profile(
        mut self,
        uc: impl UpdateProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.auth.update_profile = Arc::new(uc);
        self
    }

    // ───── hackathon posts ─────

    pub fn with_list_hackathon_posts(
        mut self,
        uc: impl ListHackathonPostsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.hackathon.list = Arc::new(uc);
        self
    }

    pub fn with_create_hackathon_post(
        mut self,
        uc: impl CreateHackathonPostUseCase + Send + Sync + 'static,
    ) -> Self {
        self.hackathon.create = Arc::new(uc);
        self
    }

    pub fn with_update_hackathon_post(
        mut self,
        uc: impl UpdateHackathonPostUseCase + Send + Sync + 'static,
    ) -> Self {
        self.hackathon.update = Arc::new(uc);
        self
    }

    pub fn with_delete_hackathon_post(
        mut self,
        uc: impl DeleteHackathonPostUseCase + Send + Sync + 'static,
    ) -> Self {
        self.hackathon.delete = Arc::new(uc);
        self
    }

    // ───── promotions ─────

    pub fn with_list_promotions(
        mut self,
        uc: impl ListPromotionsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.promotion.list_all = Arc::new(uc);
        self
    }

    pub fn with_list_my_promotions(
        mut self,
        uc: impl ListMyPromotionsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.promotion.list_mine = Arc::new(uc);
        self
    }

    pub fn with_create_promotion(
        mut self,
        uc: impl CreatePromotionUseCase + Send + Sync + 'static,
    ) -> Self {
        self.promotion.create = Arc::new(uc);
        self
    }

    pub fn with_update_promotion(
        mut self,
        uc: impl UpdatePromotionUseCase + Send + Sync + 'static,
    ) -> Self {
        self.promotion.update = Arc::new(uc);
        self
    }

    pub fn with_delete_promotion(
        mut self,
        uc: impl DeletePromotionUseCase + Send + Sync + 'static,
    ) -> Self {
        self.promotion.delete = Arc::new(uc);
        self
    }

    pub fn with_react_to_promotion(
        mut self,
        uc: impl ReactToPromotionUseCase + Send + Sync + 'static,
    ) -> Self {
        self.promotion.react = Arc::new(uc);
        self
    }

    // ───── jobs ─────

    pub fn with_list_jobs(mut self, uc: impl ListJobsUseCase + Send + Sync + 'static) -> Self {
        self.job.list = Arc::new(uc);
        self
    }

    pub fn with_create_job(mut self, uc: impl CreateJobUseCase + Send + Sync + 'static) -> Self {
        self.job.create = Arc::new(uc);
        self
    }

    pub fn with_apply_to_job(mut self, uc: impl ApplyToJobUseCase + Send + Sync + 'static) -> Self {
        self.job.apply = Arc::new(uc);
        self
    }

    // ───── mentors ─────

    pub fn with_apply_as_mentor(
        mut self,
        uc: impl ApplyAsMentorUseCase + Send + Sync + 'static,
    ) -> Self {
        self.mentor.apply = Arc::new(uc);
        self
    }

    pub fn with_list_mentors(mut self, uc: impl ListMentorsUseCase + Send + Sync + 'static) -> Self {
        self.mentor.list = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            auth: self.auth,
            hackathon: self.hackathon,
            promotion: self.promotion,
            job: self.job,
            mentor: self.mentor,
        })
    }
}
