// src/api/schemas.rs
use serde::Serialize;
use utoipa::ToSchema;

/// Standard success response wrapper
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    /// Always true for successful responses
    #[schema(example = true)]
    pub success: bool,
    /// Response data
    pub data: T,
}

/// Standard error response wrapper
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Always false for error responses
    #[schema(example = false)]
    pub success: bool,
    /// Error details
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// Error code for programmatic handling
    #[schema(example = "VALIDATION_ERROR")]
    pub code: String,

    /// Human-readable error message
    #[schema(example = "Username must be 3-30 letters, digits or underscores")]
    pub message: String,
}

/// Public profile of a registered user
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileSchema {
    #[serde(rename = "_id")]
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    pub id: String,
    #[schema(example = "Ada Lovelace")]
    pub full_name: String,
    #[schema(example = "ada")]
    pub username: String,
    /// `Founder`, `Co-Founder` or `Hustler`
    #[schema(example = "Founder")]
    pub role: Option<String>,
    /// `Student` or `Working Professional`
    #[schema(example = "Student")]
    pub user_type: Option<String>,
    pub location: Option<String>,
    pub skills: Vec<String>,
    pub bio: Option<String>,
    #[schema(example = "2024-03-01T10:00:00Z")]
    pub created_at: String,
    pub profile_picture: Option<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponseSchema {
    /// JWT access token
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub access_token: String,
    pub user: UserProfileSchema,
}
