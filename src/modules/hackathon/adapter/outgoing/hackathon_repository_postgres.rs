use async_trait::async_trait;
use chrono::Utc;
use hub_core::{HackathonPost, PostAuthor};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::authors::load_author;
use crate::auth::application::domain::entities::UserId;
use crate::hackathon::adapter::outgoing::sea_orm_entity::hackathon_posts::{
    self, ActiveModel, Column, Entity,
};
use crate::hackathon::application::ports::outgoing::{
    HackathonPostData, HackathonRepository, HackathonRepositoryError,
};

#[derive(Clone)]
pub struct HackathonRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl HackathonRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn author_of(&self, user_id: Uuid) -> Result<PostAuthor, HackathonRepositoryError> {
        load_author(&*self.db, user_id)
            .await
            .map_err(map_db_err)?
            .ok_or(HackathonRepositoryError::UnknownAuthor)
    }
}

/// Every column a create or update writes.
fn content_columns(data: HackathonPostData) -> Result<ActiveModel, HackathonRepositoryError> {
    let skills = serde_json::to_value(&data.skills)
        .map_err(|e| HackathonRepositoryError::SerializationError(e.to_string()))?;
    let teammates = i32::try_from(data.teammates_required).map_err(|_| {
        HackathonRepositoryError::SerializationError(format!(
            "teammates_required too large: {}",
            data.teammates_required
        ))
    })?;

    Ok(ActiveModel {
        hackathon_name: Set(data.hackathon_name),
        hackathon_link: Set(data.hackathon_link),
        description: Set(data.description),
        skills: Set(skills),
        location: Set(data.location),
        city: Set(data.city),
        teammates_required: Set(teammates),
        status: Set(data.status.as_str().to_string()),
        prize: Set(data.prize),
        start_date: Set(data.start_date.map(|d| d.fixed_offset())),
        end_date: Set(data.end_date.map(|d| d.fixed_offset())),
        ..Default::default()
    })
}

fn to_post(
    row: &hackathon_posts::Model,
    author: PostAuthor,
) -> Result<HackathonPost, HackathonRepositoryError> {
    row.to_post(author)
        .map_err(|e| HackathonRepositoryError::SerializationError(e.to_string()))
}

#[async_trait]
impl HackathonRepository for HackathonRepositoryPostgres {
    async fn create(
        &self,
        owner: UserId,
        data: HackathonPostData,
    ) -> Result<HackathonPost, HackathonRepositoryError> {
        let author = self.author_of(owner.value()).await?;
        let now = Utc::now().fixed_offset();

        let mut model = content_columns(data)?;
        model.id = Set(Uuid::new_v4());
        model.user_id = Set(owner.value());
        model.created_at = Set(now);
        model.updated_at = Set(now);

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;
        to_post(&inserted, author)
    }

    async fn update(
        &self,
        id: Uuid,
        data: HackathonPostData,
    ) -> Result<HackathonPost, HackathonRepositoryError> {
        let updated = Entity::update_many()
            .set(content_columns(data)?)
            .filter(Column::Id.eq(id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .next()
            .ok_or(HackathonRepositoryError::NotFound)?;

        let author = self.author_of(updated.user_id).await?;
        to_post(&updated, author)
    }

    async fn delete(&self, id: Uuid) -> Result<(), HackathonRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(HackathonRepositoryError::NotFound);
        }
        Ok(())
    }
}

fn map_db_err(e: DbErr) -> HackathonRepositoryError {
    HackathonRepositoryError::DatabaseError(e.to_string())
}
