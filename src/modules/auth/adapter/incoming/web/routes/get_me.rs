use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse, UserProfileSchema};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::ports::incoming::use_cases::GetProfileError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Profile of the signed-in user
#[utoipa::path(
    get,
    path = "/backend/auth/me",
    tag = "users",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Current profile", body = inline(SuccessResponse<UserProfileSchema>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Token refers to a deleted user", body = ErrorResponse),
    )
)]
#[get("/backend/auth/me")]
pub async fn get_me_handler(user: AuthenticatedUser, data: web::Data<AppState>) -> impl Responder {
    match data.auth.get_profile.execute(user.user_id).await {
        Ok(profile) => ApiResponse::success(profile),
        Err(GetProfileError::NotFound) => ApiResponse::not_found("USER_NOT_FOUND", "User not found"),
        Err(GetProfileError::QueryError(e)) => {
            error!("Query error fetching profile {}: {}", user.user_id, e);
            ApiResponse::internal_error()
        }
    }
}
