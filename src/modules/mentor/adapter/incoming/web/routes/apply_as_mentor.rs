use actix_web::{post, web, Responder};
use hub_core::requests::MentorApplicationInput;
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::mentor::application::ports::incoming::use_cases::ApplyAsMentorError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[post("/backend/mentor/apply")]
pub async fn apply_as_mentor_handler(
    user: AuthenticatedUser,
    req: web::Json<MentorApplicationInput>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.mentor.apply.execute(user.user_id, req.into_inner()).await {
        Ok(application) => ApiResponse::created(application),

        Err(ApplyAsMentorError::Invalid(errors)) => ApiResponse::validation_failed(&errors),

        Err(e @ ApplyAsMentorError::AlreadyApplied) => {
            ApiResponse::conflict("ALREADY_APPLIED", &e.to_string())
        }

        Err(ApplyAsMentorError::UnknownApplicant) => ApiResponse::unauthorized(
            "INVALID_TOKEN",
            "Account for this token no longer exists",
        ),

        Err(ApplyAsMentorError::RepositoryError(e)) => {
            error!("Repository error storing mentor application: {}", e);
            ApiResponse::internal_error()
        }
    }
}
