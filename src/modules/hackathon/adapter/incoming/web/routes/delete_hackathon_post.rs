use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::hackathon::application::ports::incoming::use_cases::DeleteHackathonPostError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/backend/hackathon-posts/{id}")]
pub async fn delete_hackathon_post_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .hackathon
        .delete
        .execute(user.user_id, path.into_inner())
        .await
    {
        Ok(()) => ApiResponse::ok(),

        Err(DeleteHackathonPostError::NotFound) => {
            ApiResponse::not_found("POST_NOT_FOUND", "Post not found")
        }

        Err(e @ DeleteHackathonPostError::NotOwner) => ApiResponse::not_owner(&e.to_string()),

        Err(DeleteHackathonPostError::RepositoryError(e)) => {
            error!("Repository error deleting hackathon post: {}", e);
            ApiResponse::internal_error()
        }
    }
}
