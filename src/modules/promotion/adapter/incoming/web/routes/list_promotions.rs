use actix_web::{get, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::promotion::application::ports::incoming::use_cases::ListPromotionsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/backend/promote/getAllPromotions")]
pub async fn list_promotions_handler(data: web::Data<AppState>) -> impl Responder {
    match data.promotion.list_all.execute().await {
        Ok(posts) => ApiResponse::success(posts),
        Err(ListPromotionsError::QueryError(e)) => {
            error!("Query error listing promotions: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[get("/backend/promote/mine")]
pub async fn list_my_promotions_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.promotion.list_mine.execute(user.user_id).await {
        Ok(posts) => ApiResponse::success(posts),
        Err(ListPromotionsError::QueryError(e)) => {
            error!("Query error listing own promotions: {}", e);
            ApiResponse::internal_error()
        }
    }
}
