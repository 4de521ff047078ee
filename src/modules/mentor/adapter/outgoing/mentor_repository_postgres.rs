use async_trait::async_trait;
use chrono::Utc;
use hub_core::{MentorApplication, MentorStatus};
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, Set};
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::mentor::adapter::outgoing::sea_orm_entity::mentor_applications::ActiveModel;
use crate::mentor::application::ports::outgoing::{
    MentorApplicationData, MentorRepository, MentorRepositoryError,
};

#[derive(Clone)]
pub struct MentorRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl MentorRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MentorRepository for MentorRepositoryPostgres {
    async fn create(
        &self,
        applicant: UserId,
        data: MentorApplicationData,
    ) -> Result<MentorApplication, MentorRepositoryError> {
        let years = i32::try_from(data.experience_years).map_err(|_| {
            MentorRepositoryError::SerializationError(format!(
                "experience_years too large: {}",
                data.experience_years
            ))
        })?;
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(applicant.value()),
            expertise: Set(json!(data.expertise)),
            experience_years: Set(years),
            bio: Set(data.bio),
            linkedin: Set(data.linkedin),
            availability: Set(data.availability),
            status: Set(MentorStatus::Pending.as_str().to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_insert_err)?;
        inserted
            .to_application()
            .map_err(|e| MentorRepositoryError::SerializationError(e.to_string()))
    }
}

fn map_insert_err(e: DbErr) -> MentorRepositoryError {
    let msg = e.to_string();
    if msg.contains("duplicate") || msg.contains("unique") || msg.contains("23505") {
        return MentorRepositoryError::AlreadyApplied;
    }
    if msg.contains("foreign key") || msg.contains("23503") {
        return MentorRepositoryError::UnknownApplicant;
    }
    MentorRepositoryError::DatabaseError(msg)
}
