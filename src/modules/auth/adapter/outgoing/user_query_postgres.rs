use async_trait::async_trait;
use hub_core::UserProfile;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::adapter::outgoing::sea_orm_entity::users::{self, Column, Entity};
use crate::auth::application::domain::entities::UserAccount;
use crate::auth::application::ports::outgoing::user_query::{UserQuery, UserQueryError};

#[derive(Clone)]
pub struct UserQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserQuery for UserQueryPostgres {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserAccount>, UserQueryError> {
        let Some(row) = Entity::find()
            .filter(Column::Email.eq(email.trim().to_lowercase()))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
        else {
            return Ok(None);
        };

        Ok(Some(UserAccount {
            profile: to_profile(&row)?,
            email: row.email,
            password_hash: row.password_hash,
        }))
    }

    async fn find_profile(&self, user_id: Uuid) -> Result<Option<UserProfile>, UserQueryError> {
        Entity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .as_ref()
            .map(to_profile)
            .transpose()
    }

    async fn list_profiles(&self) -> Result<Vec<UserProfile>, UserQueryError> {
        Entity::find()
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .iter()
            .map(to_profile)
            .collect()
    }
}

fn to_profile(row: &users::Model) -> Result<UserProfile, UserQueryError> {
    row.to_profile()
        .map_err(|e| UserQueryError::CorruptRow(e.to_string()))
}

fn map_db_err(e: DbErr) -> UserQueryError {
    UserQueryError::DatabaseError(e.to_string())
}
