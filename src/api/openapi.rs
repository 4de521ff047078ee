use crate::api::schemas::{ErrorDetail, ErrorResponse, LoginResponseSchema, UserProfileSchema};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::auth::adapter::incoming::web::routes::{
    LoginRequestDto, RegisterRequestDto, UpdateProfileRequestDto,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Builder Hub API",
        version = "1.0.0",
        description = "Accounts, founder directory, hackathon teammate posts, promotions, jobs and mentors",
    ),
    paths(
        crate::auth::adapter::incoming::web::routes::register_user_handler,
        crate::auth::adapter::incoming::web::routes::login_user_handler,
        crate::auth::adapter::incoming::web::routes::get_me_handler,
        crate::auth::adapter::incoming::web::routes::update_profile_handler,
        crate::auth::adapter::incoming::web::routes::list_users_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            ErrorDetail,
            UserProfileSchema,
            LoginResponseSchema,
            RegisterRequestDto,
            LoginRequestDto,
            UpdateProfileRequestDto,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Registration and login"),
        (name = "users", description = "Profiles and the founder directory"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Access token from /backend/auth/login"))
                        .build(),
                ),
            )
        }
    }
}
