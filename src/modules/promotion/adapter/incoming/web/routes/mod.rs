mod create_promotion;
mod delete_promotion;
mod list_promotions;
mod react_to_promotion;
mod update_promotion;

pub use create_promotion::create_promotion_handler;
pub use delete_promotion::delete_promotion_handler;
pub use list_promotions::{list_my_promotions_handler, list_promotions_handler};
pub use react_to_promotion::{dislike_promotion_handler, like_promotion_handler};
pub use update_promotion::update_promotion_handler;
