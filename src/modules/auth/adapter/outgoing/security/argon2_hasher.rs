use argon2::{
    password_hash::{
        Error as PasswordHashError, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString,
    },
    Algorithm, Argon2, Params, Version,
};
use async_trait::async_trait;
use rand_core::OsRng;

use crate::auth::application::ports::outgoing::password_hasher::{HashError, PasswordHasher};

#[derive(Debug, Clone, thiserror::Error)]
#[error("Invalid Argon2 parameters: {0}")]
pub struct Argon2HasherError(String);

/// Argon2id; hashing and verification run on the blocking pool.
#[derive(Clone)]
pub struct Argon2Hasher {
    params: Params,
}

impl Argon2Hasher {
    pub fn with_params(
        memory_kib: u32,
        iterations: u32,
        parallelism: u32,
    ) -> Result<Self, Argon2HasherError> {
        let params = Params::new(memory_kib, iterations, parallelism, None)
            .map_err(|e| Argon2HasherError(e.to_string()))?;
        Ok(Self { params })
    }

    /// `ARGON2_MEMORY_KIB`, `ARGON2_ITERATIONS`, `ARGON2_PARALLELISM`;
    /// defaults suit a small VPS (19 MiB, 2 passes, 1 lane).
    pub fn from_env() -> Result<Self, Argon2HasherError> {
        fn read(key: &str, default: u32) -> u32 {
            std::env::var(key)
                .ok()
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(default)
        }

        Self::with_params(
            read("ARGON2_MEMORY_KIB", 19 * 1024),
            read("ARGON2_ITERATIONS", 2),
            read("ARGON2_PARALLELISM", 1),
        )
    }

    /// Cheapest valid parameters, for tests.
    #[cfg(test)]
    pub fn fast() -> Self {
        Self::with_params(Params::MIN_M_COST, 1, 1).expect("minimum argon2 params")
    }
}

#[async_trait]
impl PasswordHasher for Argon2Hasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        let password = password.to_string();
        let params = self.params.clone();

        tokio::task::spawn_blocking(move || {
            let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);
            let salt = SaltString::generate(&mut OsRng);

            argon2
                .hash_password(password.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(|_| HashError::HashFailed)
        })
        .await
        .map_err(|_| HashError::TaskFailed)?
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        let password = password.to_string();
        let hash = hash.to_string();

        tokio::task::spawn_blocking(move || {
            let parsed = PasswordHash::new(&hash).map_err(|_| HashError::MalformedHash)?;

            // Parameters come from the PHC string, not from `self`.
            match Argon2::default().verify_password(password.as_bytes(), &parsed) {
                Ok(()) => Ok(true),
                Err(PasswordHashError::Password) => Ok(false),
                Err(_) => Err(HashError::MalformedHash),
            }
        })
        .await
        .map_err(|_| HashError::TaskFailed)?
    }
}
