use actix_web::{post, web, Responder};
use hub_core::requests::HackathonPostInput;
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::hackathon::application::ports::incoming::use_cases::CreateHackathonPostError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[post("/backend/hackathon-posts")]
pub async fn create_hackathon_post_handler(
    user: AuthenticatedUser,
    req: web::Json<HackathonPostInput>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .hackathon
        .create
        .execute(user.user_id, req.into_inner())
        .await
    {
        Ok(post) => ApiResponse::created(post),

        Err(CreateHackathonPostError::Invalid(errors)) => ApiResponse::validation_failed(&errors),

        Err(CreateHackathonPostError::UnknownAuthor) => ApiResponse::unauthorized(
            "INVALID_TOKEN",
            "Account for this token no longer exists",
        ),

        Err(CreateHackathonPostError::RepositoryError(e)) => {
            error!("Repository error creating hackathon post: {}", e);
            ApiResponse::internal_error()
        }
    }
}
