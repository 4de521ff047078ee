use actix_web::{post, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::job::application::ports::incoming::use_cases::ApplyToJobError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[post("/backend/jobs/{id}/apply")]
pub async fn apply_to_job_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.job.apply.execute(user.user_id, path.into_inner()).await {
        Ok(job) => ApiResponse::success(job),

        Err(ApplyToJobError::NotFound) => ApiResponse::not_found("JOB_NOT_FOUND", "Job not found"),

        Err(ApplyToJobError::RepositoryError(e)) => {
            error!("Repository error recording job application: {}", e);
            ApiResponse::internal_error()
        }
    }
}
