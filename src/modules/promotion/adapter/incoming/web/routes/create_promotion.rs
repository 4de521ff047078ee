use actix_web::{post, web, Responder};
use hub_core::requests::PromotionInput;
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::promotion::application::ports::incoming::use_cases::CreatePromotionError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[post("/backend/promote/promote")]
pub async fn create_promotion_handler(
    user: AuthenticatedUser,
    req: web::Json<PromotionInput>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .promotion
        .create
        .execute(user.user_id, req.into_inner())
        .await
    {
        Ok(post) => ApiResponse::created(post),

        Err(CreatePromotionError::Invalid(errors)) => ApiResponse::validation_failed(&errors),

        Err(CreatePromotionError::UnknownAuthor) => ApiResponse::unauthorized(
            "INVALID_TOKEN",
            "Account for this token no longer exists",
        ),

        Err(CreatePromotionError::RepositoryError(e)) => {
            error!("Repository error creating promotion: {}", e);
            ApiResponse::internal_error()
        }
    }
}
