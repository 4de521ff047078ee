use actix_web::{post, web, Responder};
use hub_core::requests::LoginInput;
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, LoginResponseSchema, SuccessResponse};
use crate::auth::application::ports::incoming::use_cases::LoginUserError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Login request from client
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct LoginRequestDto {
    #[schema(example = "ada@example.com")]
    pub email: String,

    #[schema(example = "correct-horse-battery")]
    pub password: String,
}

/// User login
///
/// Authenticates with email and password and returns an access token.
#[utoipa::path(
    post,
    path = "/backend/auth/login",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Login successful", body = inline(SuccessResponse<LoginResponseSchema>)),
        (status = 400, description = "Missing or malformed email", body = ErrorResponse),
        (
            status = 401,
            description = "Invalid credentials",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "INVALID_CREDENTIALS", "message": "Invalid email or password" }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/backend/auth/login")]
pub async fn login_user_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();
    let input = LoginInput {
        email: dto.email,
        password: dto.password,
    };

    match data.auth.login.execute(input).await {
        Ok(output) => ApiResponse::success(output),

        Err(LoginUserError::InvalidInput(msg)) => ApiResponse::bad_request("VALIDATION_ERROR", &msg),

        Err(e @ LoginUserError::InvalidCredentials) => {
            warn!("Rejected login attempt");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", &e.to_string())
        }

        Err(e) => {
            error!("Login failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}
