use std::sync::Arc;

use crate::promotion::application::ports::incoming::use_cases::{
    CreatePromotionUseCase, DeletePromotionUseCase, ListMyPromotionsUseCase,
    ListPromotionsUseCase, ReactToPromotionUseCase, UpdatePromotionUseCase,
};

#[derive(Clone)]
pub struct PromotionUseCases {
    pub list_all: Arc<dyn ListPromotionsUseCase + Send + Sync>,
    pub list_mine: Arc<dyn ListMyPromotionsUseCase + Send + Sync>,
    pub create: Arc<dyn CreatePromotionUseCase + Send + Sync>,
    pub update: Arc<dyn UpdatePromotionUseCase + Send + Sync>,
    pub delete: Arc<dyn DeletePromotionUseCase + Send + Sync>,
    pub react: Arc<dyn ReactToPromotionUseCase + Send + Sync>,
}
