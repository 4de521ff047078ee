pub mod promotion_query;
pub mod promotion_repository;

pub use promotion_query::{PromotionQuery, PromotionQueryError};
pub use promotion_repository::{PromotionData, PromotionRepository, PromotionRepositoryError};
