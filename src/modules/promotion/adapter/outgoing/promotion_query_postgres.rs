use async_trait::async_trait;
use hub_core::PromotionPost;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::promotion::adapter::outgoing::sea_orm_entity::promotions::{self, Column, Entity};
use crate::promotion::application::ports::outgoing::{PromotionQuery, PromotionQueryError};

#[derive(Clone)]
pub struct PromotionQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PromotionQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn to_posts(rows: Vec<promotions::Model>) -> Result<Vec<PromotionPost>, PromotionQueryError> {
    rows.iter()
        .map(|row| {
            row.to_post()
                .map_err(|e| PromotionQueryError::CorruptRow(format!("promotion {}: {}", row.id, e)))
        })
        .collect()
}

fn map_db_err(e: DbErr) -> PromotionQueryError {
    PromotionQueryError::DatabaseError(e.to_string())
}

#[async_trait]
impl PromotionQuery for PromotionQueryPostgres {
    async fn list_all(&self) -> Result<Vec<PromotionPost>, PromotionQueryError> {
        let rows = Entity::find()
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        to_posts(rows)
    }

    async fn list_by_owner(&self, owner: UserId) -> Result<Vec<PromotionPost>, PromotionQueryError> {
        let rows = Entity::find()
            .filter(Column::UserId.eq(owner.value()))
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        to_posts(rows)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<PromotionPost>, PromotionQueryError> {
        let Some(row) = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
        else {
            return Ok(None);
        };

        row.to_post()
            .map(Some)
            .map_err(|e| PromotionQueryError::CorruptRow(format!("promotion {}: {}", id, e)))
    }
}
