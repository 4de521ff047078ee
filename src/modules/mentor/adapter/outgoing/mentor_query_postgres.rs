use async_trait::async_trait;
use hub_core::{MentorApplication, MentorStatus};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;

use crate::mentor::adapter::outgoing::sea_orm_entity::mentor_applications::{Column, Entity};
use crate::mentor::application::ports::outgoing::{MentorQuery, MentorQueryError};

#[derive(Clone)]
pub struct MentorQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl MentorQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MentorQuery for MentorQueryPostgres {
    async fn list_visible(&self) -> Result<Vec<MentorApplication>, MentorQueryError> {
        let rows = Entity::find()
            .filter(Column::Status.is_in([
                MentorStatus::Approved.as_str(),
                MentorStatus::Pending.as_str(),
            ]))
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(|e| MentorQueryError::DatabaseError(e.to_string()))?;

        rows.iter()
            .map(|row| {
                row.to_application().map_err(|e| {
                    MentorQueryError::CorruptRow(format!("mentor application {}: {}", row.id, e))
                })
            })
            .collect()
    }
}
