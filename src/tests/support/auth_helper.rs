use std::sync::Arc;

use uuid::Uuid;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;

pub fn test_jwt_service() -> JwtTokenService {
    JwtTokenService::new(JwtConfig {
        secret_key: "test_secret_key_for_testing_only_0123456789".to_string(),
        issuer: "builder-hub".to_string(),
        access_token_expiry: 3600,
    })
}

/// What the server registers as app data; the auth extractors look it up
/// under this exact type.
pub fn test_token_provider() -> Arc<dyn TokenProvider + Send + Sync> {
    Arc::new(test_jwt_service())
}

/// `Authorization` header value carrying a fresh access token for `user_id`.
pub fn bearer(user_id: Uuid) -> String {
    let token = test_jwt_service()
        .generate_access_token(user_id)
        .expect("test token");
    format!("Bearer {}", token)
}
