use std::env;

pub const MIN_SECRET_LEN: usize = 32;
const MAX_ACCESS_EXPIRY: i64 = 7 * 24 * 3600;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JwtConfigError {
    #[error("JWT_SECRET must be set")]
    MissingSecret,

    #[error("JWT_SECRET must be at least {MIN_SECRET_LEN} characters long for HS256")]
    SecretTooShort,

    #[error("Invalid {0} value")]
    InvalidNumber(&'static str),

    #[error("JWT_ACCESS_EXPIRY must be between 1 and {MAX_ACCESS_EXPIRY} seconds")]
    ExpiryOutOfRange,
}

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    /// Seconds.
    pub access_token_expiry: i64,
}

impl JwtConfig {
    /// Reads `JWT_SECRET`, `JWT_ISSUER` and `JWT_ACCESS_EXPIRY`.
    pub fn from_env() -> Result<Self, JwtConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, JwtConfigError> {
        let secret_key = lookup("JWT_SECRET").ok_or(JwtConfigError::MissingSecret)?;
        if secret_key.len() < MIN_SECRET_LEN {
            return Err(JwtConfigError::SecretTooShort);
        }

        let access_token_expiry = match lookup("JWT_ACCESS_EXPIRY") {
            Some(raw) => raw
                .trim()
                .parse::<i64>()
                .map_err(|_| JwtConfigError::InvalidNumber("JWT_ACCESS_EXPIRY"))?,
            None => 86400,
        };
        if access_token_expiry <= 0 || access_token_expiry > MAX_ACCESS_EXPIRY {
            return Err(JwtConfigError::ExpiryOutOfRange);
        }

        let issuer = lookup("JWT_ISSUER").unwrap_or_else(|| "builder-hub".to_string());

        Ok(Self {
            secret_key,
            issuer,
            access_token_expiry,
        })
    }
}
