use std::sync::Arc;

use crate::mentor::application::ports::incoming::use_cases::{
    ApplyAsMentorUseCase, ListMentorsUseCase,
};

#[derive(Clone)]
pub struct MentorUseCases {
    pub apply: Arc<dyn ApplyAsMentorUseCase + Send + Sync>,
    pub list: Arc<dyn ListMentorsUseCase + Send + Sync>,
}
