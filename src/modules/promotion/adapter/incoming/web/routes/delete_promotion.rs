use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::promotion::application::ports::incoming::use_cases::DeletePromotionError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/backend/promote/{id}")]
pub async fn delete_promotion_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .promotion
        .delete
        .execute(user.user_id, path.into_inner())
        .await
    {
        Ok(()) => ApiResponse::ok(),

        Err(DeletePromotionError::NotFound) => {
            ApiResponse::not_found("PROMOTION_NOT_FOUND", "Promotion not found")
        }

        Err(e @ DeletePromotionError::NotOwner) => ApiResponse::not_owner(&e.to_string()),

        Err(DeletePromotionError::RepositoryError(e)) => {
            error!("Repository error deleting promotion: {}", e);
            ApiResponse::internal_error()
        }
    }
}
