use actix_web::{post, web, Responder};
use hub_core::requests::JobInput;
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::job::application::ports::incoming::use_cases::CreateJobError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[post("/backend/jobs")]
pub async fn create_job_handler(
    user: AuthenticatedUser,
    req: web::Json<JobInput>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.job.create.execute(user.user_id, req.into_inner()).await {
        Ok(job) => ApiResponse::created(job),

        Err(CreateJobError::Invalid(errors)) => ApiResponse::validation_failed(&errors),

        Err(CreateJobError::UnknownPoster) => ApiResponse::unauthorized(
            "INVALID_TOKEN",
            "Account for this token no longer exists",
        ),

        Err(CreateJobError::RepositoryError(e)) => {
            error!("Repository error creating job: {}", e);
            ApiResponse::internal_error()
        }
    }
}
