mod create_promotion;
mod delete_promotion;
mod list_promotions;
mod react_to_promotion;
mod update_promotion;

pub use create_promotion::{CreatePromotionError, CreatePromotionUseCase};
pub use delete_promotion::{DeletePromotionError, DeletePromotionUseCase};
pub use list_promotions::{ListMyPromotionsUseCase, ListPromotionsError, ListPromotionsUseCase};
pub use react_to_promotion::{ReactToPromotionError, ReactToPromotionUseCase};
pub use update_promotion::{UpdatePromotionError, UpdatePromotionUseCase};
