use actix_web::{put, web, Responder};
use hub_core::requests::ProfileInput;
use hub_core::{FounderRole, UserType};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse, UserProfileSchema};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::ports::incoming::use_cases::UpdateProfileError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Profile completion form
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateProfileRequestDto {
    #[schema(example = "Ada Lovelace")]
    pub full_name: String,
    /// `Founder`, `Co-Founder` or `Hustler`
    #[schema(value_type = Option<String>, example = "Founder")]
    pub role: Option<FounderRole>,
    /// `Student` or `Working Professional`
    #[schema(value_type = Option<String>, example = "Student")]
    pub user_type: Option<UserType>,
    pub location: Option<String>,
    pub skills: Vec<String>,
    pub bio: Option<String>,
    pub profile_picture: Option<String>,
}

impl From<UpdateProfileRequestDto> for ProfileInput {
    fn from(dto: UpdateProfileRequestDto) -> Self {
        ProfileInput {
            full_name: dto.full_name,
            role: dto.role,
            user_type: dto.user_type,
            location: dto.location,
            skills: dto.skills,
            bio: dto.bio,
            profile_picture: dto.profile_picture,
        }
    }
}

/// Update the signed-in user's profile
#[utoipa::path(
    put,
    path = "/backend/auth/profile",
    tag = "users",
    security(("BearerAuth" = [])),
    request_body = UpdateProfileRequestDto,
    responses(
        (status = 200, description = "Updated profile", body = inline(SuccessResponse<UserProfileSchema>)),
        (
            status = 400,
            description = "Required field missing",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "VALIDATION_ERROR", "message": "Full name is required" }
            })
        ),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
    )
)]
#[put("/backend/auth/profile")]
pub async fn update_profile_handler(
    user: AuthenticatedUser,
    req: web::Json<UpdateProfileRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .auth
        .update_profile
        .execute(user.user_id, req.into_inner().into())
        .await
    {
        Ok(profile) => ApiResponse::success(profile),
        Err(UpdateProfileError::Invalid(errors)) => ApiResponse::validation_failed(&errors),
        Err(UpdateProfileError::NotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(UpdateProfileError::RepositoryError(e)) => {
            error!("Repository error updating profile {}: {}", user.user_id, e);
            ApiResponse::internal_error()
        }
    }
}
