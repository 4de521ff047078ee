use actix_web::{post, web, Responder};
use hub_core::requests::RegisterInput;
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse, UserProfileSchema};
use crate::auth::application::ports::incoming::use_cases::RegisterUserError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Registration request from client
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequestDto {
    /// 3-30 letters, digits or underscores
    #[schema(example = "ada")]
    pub username: String,

    #[schema(example = "ada@example.com")]
    pub email: String,

    /// At least 8 characters
    #[schema(example = "correct-horse-battery")]
    pub password: String,

    #[serde(default)]
    #[schema(example = "Ada Lovelace")]
    pub full_name: String,
}

impl From<RegisterRequestDto> for RegisterInput {
    fn from(dto: RegisterRequestDto) -> Self {
        RegisterInput {
            username: dto.username,
            email: dto.email,
            password: dto.password,
            full_name: dto.full_name,
        }
    }
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/backend/auth/register",
    tag = "auth",
    request_body = RegisterRequestDto,
    responses(
        (status = 201, description = "User created", body = inline(SuccessResponse<UserProfileSchema>)),
        (
            status = 400,
            description = "Invalid username, email or password",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "VALIDATION_ERROR", "message": "Password must be at least 8 characters" }
            })
        ),
        (
            status = 409,
            description = "Username or email already in use",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "EMAIL_TAKEN", "message": "Email already registered" }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/backend/auth/register")]
pub async fn register_user_handler(
    req: web::Json<RegisterRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.auth.register.execute(req.into_inner().into()).await {
        Ok(user) => ApiResponse::created(user),

        Err(
            e @ (RegisterUserError::InvalidUsername(_)
            | RegisterUserError::InvalidEmail(_)
            | RegisterUserError::WeakPassword(_)),
        ) => ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),

        Err(e @ RegisterUserError::UsernameTaken) => {
            ApiResponse::conflict("USERNAME_TAKEN", &e.to_string())
        }
        Err(e @ RegisterUserError::EmailTaken) => {
            ApiResponse::conflict("EMAIL_TAKEN", &e.to_string())
        }

        Err(e) => {
            error!("Registration failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}
