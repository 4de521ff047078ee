use async_trait::async_trait;
use email_address::EmailAddress;
use hub_core::requests::RegisterInput;
use hub_core::UserProfile;
use regex::Regex;
use std::sync::{Arc, LazyLock};
use tracing::info;

use crate::auth::application::ports::incoming::use_cases::{
    RegisterUserError, RegisterUserUseCase,
};
use crate::auth::application::ports::outgoing::{
    NewUser, PasswordHasher, UserRepository, UserRepositoryError,
};

pub const MIN_PASSWORD_LEN: usize = 8;

static USERNAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_]{3,30}$").expect("static username pattern"));

pub struct RegisterUserService<R>
where
    R: UserRepository,
{
    repository: R,
    hasher: Arc<dyn PasswordHasher>,
}

impl<R> RegisterUserService<R>
where
    R: UserRepository,
{
    pub fn new(repository: R, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { repository, hasher }
    }
}

/// Trims and checks the registration, lowercasing the email.
fn normalize(input: RegisterInput) -> Result<RegisterInput, RegisterUserError> {
    let username = input.username.trim().to_string();
    if !USERNAME_RE.is_match(&username) {
        return Err(RegisterUserError::InvalidUsername(
            "Username must be 3-30 letters, digits or underscores".to_string(),
        ));
    }

    let email = input.email.trim().to_lowercase();
    if !EmailAddress::is_valid(&email) {
        return Err(RegisterUserError::InvalidEmail(
            "Invalid email format".to_string(),
        ));
    }

    if input.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(RegisterUserError::WeakPassword(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        )));
    }

    Ok(RegisterInput {
        username,
        email,
        password: input.password,
        full_name: input.full_name.trim().to_string(),
    })
}

#[async_trait]
impl<R> RegisterUserUseCase for RegisterUserService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, input: RegisterInput) -> Result<UserProfile, RegisterUserError> {
        let input = normalize(input)?;

        let password_hash = self
            .hasher
            .hash_password(&input.password)
            .await
            .map_err(|e| RegisterUserError::HashingFailed(e.to_string()))?;

        let profile = self
            .repository
            .create_user(NewUser {
                username: input.username,
                email: input.email,
                password_hash,
                full_name: input.full_name,
            })
            .await
            .map_err(|e| match e {
                UserRepositoryError::UsernameTaken => RegisterUserError::UsernameTaken,
                UserRepositoryError::EmailTaken => RegisterUserError::EmailTaken,
                other => RegisterUserError::RepositoryError(other.to_string()),
            })?;

        info!(user_id = %profile.id, username = %profile.username, "User registered");
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::UserId;
    use crate::auth::application::ports::outgoing::HashError;
    use crate::tests::support::fixtures::user_profile;
    use hub_core::requests::ProfileInput;
    use mockall::{mock, predicate::*};

    mock! {
        pub Repo {}
        #[async_trait]
        impl UserRepository for Repo {
            async fn create_user(&self, user: NewUser) -> Result<UserProfile, UserRepositoryError>;
            async fn update_profile(
                &self,
                user_id: UserId,
                profile: ProfileInput,
            ) -> Result<UserProfile, UserRepositoryError>;
        }
    }

    mock! {
        pub Hasher {}
        #[async_trait]
        impl PasswordHasher for Hasher {
            async fn hash_password(&self, password: &str) -> Result<String, HashError>;
            async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError>;
        }
    }

    fn input() -> RegisterInput {
        RegisterInput {
            username: " ada_l ".to_string(),
            email: "Ada@Example.com".to_string(),
            password: "correct horse".to_string(),
            full_name: "Ada Lovelace".to_string(),
        }
    }

    fn hasher() -> Arc<dyn PasswordHasher> {
        let mut hasher = MockHasher::new();
        hasher
            .expect_hash_password()
            .returning(|_| Ok("$argon2id$fake".to_string()));
        Arc::new(hasher)
    }

    #[tokio::test]
    async fn test_register_normalizes_and_stores_hash() {
        let mut repo = MockRepo::new();
        repo.expect_create_user()
            .withf(|u| {
                u.username == "ada_l"
                    && u.email == "ada@example.com"
                    && u.password_hash == "$argon2id$fake"
            })
            .times(1)
            .returning(|u| Ok(user_profile(&u.username)));

        let service = RegisterUserService::new(repo, hasher());
        let profile = service.execute(input()).await.unwrap();

        assert_eq!(profile.username, "ada_l");
    }

    #[tokio::test]
    async fn test_register_rejects_bad_username_before_hashing() {
        let repo = MockRepo::new();
        let service = RegisterUserService::new(repo, Arc::new(MockHasher::new()));

        let mut bad = input();
        bad.username = "a!".to_string();

        assert!(matches!(
            service.execute(bad).await,
            Err(RegisterUserError::InvalidUsername(_))
        ));
    }

    #[tokio::test]
    async fn test_register_rejects_invalid_email_and_short_password() {
        let service = RegisterUserService::new(MockRepo::new(), Arc::new(MockHasher::new()));

        let mut bad_email = input();
        bad_email.email = "not-an-email".to_string();
        assert!(matches!(
            service.execute(bad_email).await,
            Err(RegisterUserError::InvalidEmail(_))
        ));

        let mut short = input();
        short.password = "short".to_string();
        assert!(matches!(
            service.execute(short).await,
            Err(RegisterUserError::WeakPassword(_))
        ));
    }

    #[tokio::test]
    async fn test_register_maps_taken_username() {
        let mut repo = MockRepo::new();
        repo.expect_create_user()
            .returning(|_| Err(UserRepositoryError::UsernameTaken));

        let service = RegisterUserService::new(repo, hasher());

        assert!(matches!(
            service.execute(input()).await,
            Err(RegisterUserError::UsernameTaken)
        ));
    }

    #[tokio::test]
    async fn test_register_maps_hash_failure() {
        let mut hasher = MockHasher::new();
        hasher
            .expect_hash_password()
            .returning(|_| Err(HashError::TaskFailed));

        let service = RegisterUserService::new(MockRepo::new(), Arc::new(hasher));

        assert!(matches!(
            service.execute(input()).await,
            Err(RegisterUserError::HashingFailed(_))
        ));
    }
}
