use actix_web::{get, web, Responder};
use hub_core::query::HackathonPostParams;
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::MaybeUser;
use crate::hackathon::application::ports::incoming::use_cases::ListHackathonPostsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Public listing. Accepts `tab, search, status, location, startDate,
/// endDate, sort`; a bearer token is only consulted for `tab=my`.
#[get("/backend/hackathon-posts")]
pub async fn list_hackathon_posts_handler(
    viewer: MaybeUser,
    params: web::Query<HackathonPostParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.hackathon.list.execute(params.into_inner(), viewer.0).await {
        Ok(posts) => ApiResponse::success(posts),

        Err(ListHackathonPostsError::InvalidQuery(msg)) => {
            ApiResponse::bad_request("INVALID_QUERY", &msg)
        }

        Err(ListHackathonPostsError::QueryError(e)) => {
            error!("Query error listing hackathon posts: {}", e);
            ApiResponse::internal_error()
        }
    }
}
