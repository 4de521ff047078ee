use actix_web::{get, web, Responder};
use hub_core::query::FounderParams;
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse, UserProfileSchema};
use crate::auth::application::ports::incoming::use_cases::ListUsersError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Founder directory
///
/// Lists every user, optionally narrowed by `search`, `role` and `userType`
/// and ordered by `sort` (`recent`, `oldest`, `name-az`, `name-za`).
#[utoipa::path(
    get,
    path = "/backend/auth/users",
    tag = "users",
    params(
        ("search" = Option<String>, Query, description = "Matches name, username, skills, location"),
        ("role" = Option<String>, Query, description = "Founder, Co-Founder, Hustler or all"),
        ("userType" = Option<String>, Query, description = "Student, Working Professional or all"),
        ("sort" = Option<String>, Query, description = "recent (default), oldest, name-az, name-za"),
    ),
    responses(
        (status = 200, description = "Matching users", body = inline(SuccessResponse<Vec<UserProfileSchema>>)),
        (status = 400, description = "Unknown filter value", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/backend/auth/users")]
pub async fn list_users_handler(
    params: web::Query<FounderParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.auth.list_users.execute(params.into_inner()).await {
        Ok(users) => ApiResponse::success(users),

        Err(ListUsersError::InvalidQuery(msg)) => ApiResponse::bad_request("INVALID_QUERY", &msg),

        Err(ListUsersError::QueryError(e)) => {
            error!("Query error listing users: {}", e);
            ApiResponse::internal_error()
        }
    }
}
