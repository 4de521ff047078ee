use async_trait::async_trait;
use chrono::Utc;
use hub_core::requests::ProfileInput;
use hub_core::UserProfile;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::adapter::outgoing::sea_orm_entity::users::{self, ActiveModel, Column, Entity};
use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::user_repository::{
    NewUser, UserRepository, UserRepositoryError,
};

#[derive(Clone)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, user: NewUser) -> Result<UserProfile, UserRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            username: Set(user.username),
            email: Set(user.email),
            password_hash: Set(user.password_hash),
            full_name: Set(user.full_name),
            role: Set(None),
            user_type: Set(None),
            location: Set(None),
            skills: Set(serde_json::json!([])),
            bio: Set(None),
            profile_picture: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_unique_violation)?;
        to_profile(&inserted)
    }

    async fn update_profile(
        &self,
        user_id: UserId,
        profile: ProfileInput,
    ) -> Result<UserProfile, UserRepositoryError> {
        let skills = serde_json::to_value(&profile.skills)
            .map_err(|e| UserRepositoryError::SerializationError(e.to_string()))?;

        let changes = ActiveModel {
            full_name: Set(profile.full_name.trim().to_string()),
            role: Set(profile.role.map(|r| r.as_str().to_string())),
            user_type: Set(profile.user_type.map(|t| t.as_str().to_string())),
            location: Set(profile.location),
            skills: Set(skills),
            bio: Set(profile.bio),
            profile_picture: Set(profile.profile_picture),
            ..Default::default()
        };

        let updated = Entity::update_many()
            .set(changes)
            .filter(Column::Id.eq(user_id.value()))
            .exec_with_returning(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?
            .into_iter()
            .next()
            .ok_or(UserRepositoryError::NotFound)?;

        to_profile(&updated)
    }
}

fn to_profile(model: &users::Model) -> Result<UserProfile, UserRepositoryError> {
    model
        .to_profile()
        .map_err(|e| UserRepositoryError::SerializationError(e.to_string()))
}

fn map_unique_violation(e: DbErr) -> UserRepositoryError {
    let msg = e.to_string().to_lowercase();
    let unique = msg.contains("duplicate") || msg.contains("unique") || msg.contains("23505");

    if unique && msg.contains("username") {
        UserRepositoryError::UsernameTaken
    } else if unique && msg.contains("email") {
        UserRepositoryError::EmailTaken
    } else {
        UserRepositoryError::DatabaseError(e.to_string())
    }
}
