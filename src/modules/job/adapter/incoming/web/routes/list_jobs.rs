use actix_web::{get, web, HttpResponse, Responder};
use hub_core::jobs::{JobListResponse, JobQuery};
use tracing::error;

use crate::job::application::ports::incoming::use_cases::ListJobsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// The job board answers with `{success, jobs, pagination}` rather than the
/// usual `data` envelope.
#[get("/backend/jobs")]
pub async fn list_jobs_handler(
    query: web::Query<JobQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.job.list.execute(query.into_inner()).await {
        Ok((jobs, pagination)) => HttpResponse::Ok().json(JobListResponse {
            success: true,
            jobs,
            pagination,
        }),

        Err(ListJobsError::QueryError(e)) => {
            error!("Query error listing jobs: {}", e);
            ApiResponse::internal_error()
        }
    }
}
