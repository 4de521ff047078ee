use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const ACCESS_TOKEN: &str = "access";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("Token has expired")]
    Expired,

    #[error("Token is not yet valid")]
    NotYetValid,

    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("Malformed token")]
    Malformed,

    #[error("Unexpected token type: {0}")]
    WrongType(String),

    #[error("Token encoding error: {0}")]
    Encoding(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: Uuid,
    pub exp: i64,
    pub iat: i64,
    pub nbf: i64,
    pub iss: String,
    pub token_type: String,
}

pub trait TokenProvider: Send + Sync {
    fn generate_access_token(&self, user_id: Uuid) -> Result<String, TokenError>;

    /// Verifies signature, time window and issuer.
    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError>;

    /// Like [`TokenProvider::verify_token`] but also requires an access token.
    fn verify_access_token(&self, token: &str) -> Result<Uuid, TokenError> {
        let claims = self.verify_token(token)?;
        if claims.token_type != ACCESS_TOKEN {
            return Err(TokenError::WrongType(claims.token_type));
        }
        Ok(claims.sub)
    }
}
