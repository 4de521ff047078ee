mod create_promotion_service;
mod delete_promotion_service;
mod list_promotions_service;
mod react_to_promotion_service;
mod update_promotion_service;

pub use create_promotion_service::CreatePromotionService;
pub use delete_promotion_service::DeletePromotionService;
pub use list_promotions_service::ListPromotionsService;
pub use react_to_promotion_service::ReactToPromotionService;
pub use update_promotion_service::UpdatePromotionService;
