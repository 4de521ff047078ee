use async_trait::async_trait;
use hub_core::HackathonPost;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};
use std::sync::Arc;
use tracing::warn;
use uuid::Uuid;

use super::authors::{load_author, load_authors};
use crate::hackathon::adapter::outgoing::sea_orm_entity::hackathon_posts::{Column, Entity};
use crate::hackathon::application::ports::outgoing::{HackathonQuery, HackathonQueryError};

#[derive(Clone)]
pub struct HackathonQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl HackathonQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl HackathonQuery for HackathonQueryPostgres {
    async fn list(&self) -> Result<Vec<HackathonPost>, HackathonQueryError> {
        let rows = Entity::find()
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let authors = load_authors(&*self.db, rows.iter().map(|r| r.user_id))
            .await
            .map_err(map_db_err)?;

        let mut posts = Vec::with_capacity(rows.len());
        for row in rows {
            let Some(author) = authors.get(&row.user_id) else {
                warn!(post_id = %row.id, "Skipping hackathon post without author");
                continue;
            };
            posts.push(
                row.to_post(author.clone())
                    .map_err(|e| HackathonQueryError::CorruptRow(e.to_string()))?,
            );
        }
        Ok(posts)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<HackathonPost>, HackathonQueryError> {
        let Some(row) = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
        else {
            return Ok(None);
        };

        let Some(author) = load_author(&*self.db, row.user_id)
            .await
            .map_err(map_db_err)?
        else {
            return Ok(None);
        };

        row.to_post(author)
            .map(Some)
            .map_err(|e| HackathonQueryError::CorruptRow(e.to_string()))
    }
}

fn map_db_err(e: DbErr) -> HackathonQueryError {
    HackathonQueryError::DatabaseError(e.to_string())
}
