use std::sync::Arc;

use crate::hackathon::application::ports::incoming::use_cases::{
    CreateHackathonPostUseCase, DeleteHackathonPostUseCase, ListHackathonPostsUseCase,
    UpdateHackathonPostUseCase,
};

#[derive(Clone)]
pub struct HackathonUseCases {
    pub list: Arc<dyn ListHackathonPostsUseCase + Send + Sync>,
    pub create: Arc<dyn CreateHackathonPostUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateHackathonPostUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteHackathonPostUseCase + Send + Sync>,
}
