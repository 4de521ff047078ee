use actix_web::{put, web, Responder};
use hub_core::requests::HackathonPostInput;
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::hackathon::application::ports::incoming::use_cases::UpdateHackathonPostError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[put("/backend/hackathon-posts/{id}")]
pub async fn update_hackathon_post_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<HackathonPostInput>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .hackathon
        .update
        .execute(user.user_id, path.into_inner(), req.into_inner())
        .await
    {
        Ok(post) => ApiResponse::success(post),

        Err(UpdateHackathonPostError::NotFound) => {
            ApiResponse::not_found("POST_NOT_FOUND", "Post not found")
        }

        Err(e @ UpdateHackathonPostError::NotOwner) => ApiResponse::not_owner(&e.to_string()),

        Err(UpdateHackathonPostError::Invalid(errors)) => ApiResponse::validation_failed(&errors),

        Err(UpdateHackathonPostError::RepositoryError(e)) => {
            error!("Repository error updating hackathon post: {}", e);
            ApiResponse::internal_error()
        }
    }
}
