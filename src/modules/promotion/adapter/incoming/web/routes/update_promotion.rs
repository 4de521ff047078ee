use actix_web::{put, web, Responder};
use hub_core::requests::PromotionInput;
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::promotion::application::ports::incoming::use_cases::UpdatePromotionError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[put("/backend/promote/{id}")]
pub async fn update_promotion_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<PromotionInput>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .promotion
        .update
        .execute(user.user_id, path.into_inner(), req.into_inner())
        .await
    {
        Ok(post) => ApiResponse::success(post),

        Err(UpdatePromotionError::NotFound) => {
            ApiResponse::not_found("PROMOTION_NOT_FOUND", "Promotion not found")
        }

        Err(e @ UpdatePromotionError::NotOwner) => ApiResponse::not_owner(&e.to_string()),

        Err(UpdatePromotionError::Invalid(errors)) => ApiResponse::validation_failed(&errors),

        Err(UpdatePromotionError::RepositoryError(e)) => {
            error!("Repository error updating promotion: {}", e);
            ApiResponse::internal_error()
        }
    }
}
