use async_trait::async_trait;
use chrono::Utc;
use hub_core::{PromotionPost, Reaction};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QuerySelect, Set, TransactionTrait,
};
use serde_json::json;
use std::sync::Arc;
use tracing::warn;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::promotion::adapter::outgoing::sea_orm_entity::promotions::{
    self, ActiveModel, Column, Entity,
};
use crate::promotion::application::ports::outgoing::{
    PromotionData, PromotionRepository, PromotionRepositoryError,
};

#[derive(Clone)]
pub struct PromotionRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PromotionRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn to_post(row: &promotions::Model) -> Result<PromotionPost, PromotionRepositoryError> {
    row.to_post()
        .map_err(|e| PromotionRepositoryError::SerializationError(e.to_string()))
}

fn count(n: u32) -> Result<i32, PromotionRepositoryError> {
    i32::try_from(n)
        .map_err(|_| PromotionRepositoryError::SerializationError(format!("count too large: {n}")))
}

#[async_trait]
impl PromotionRepository for PromotionRepositoryPostgres {
    async fn create(
        &self,
        owner: UserId,
        data: PromotionData,
    ) -> Result<PromotionPost, PromotionRepositoryError> {
        let now = Utc::now().fixed_offset();
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(owner.value()),
            title: Set(data.title),
            description: Set(data.description),
            link: Set(data.link),
            likes: Set(json!([])),
            dislikes: Set(json!([])),
            number_of_likes: Set(0),
            number_of_dislikes: Set(0),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_insert_err)?;
        to_post(&inserted)
    }

    async fn update(
        &self,
        id: Uuid,
        data: PromotionData,
    ) -> Result<PromotionPost, PromotionRepositoryError> {
        let changes = ActiveModel {
            title: Set(data.title),
            description: Set(data.description),
            link: Set(data.link),
            ..Default::default()
        };

        let updated = Entity::update_many()
            .set(changes)
            .filter(Column::Id.eq(id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .next()
            .ok_or(PromotionRepositoryError::NotFound)?;

        to_post(&updated)
    }

    async fn delete(&self, id: Uuid) -> Result<(), PromotionRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(PromotionRepositoryError::NotFound);
        }
        Ok(())
    }

    async fn react(
        &self,
        id: Uuid,
        user: UserId,
        reaction: Reaction,
    ) -> Result<PromotionPost, PromotionRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        // SELECT ... FOR UPDATE serialises reactions on the same row.
        let row = Entity::find_by_id(id)
            .lock_exclusive()
            .one(&txn)
            .await
            .map_err(map_db_err)?;

        let Some(row) = row else {
            txn.rollback().await.map_err(map_db_err)?;
            return Err(PromotionRepositoryError::NotFound);
        };

        let mut post = to_post(&row)?;
        post.react(user.value(), reaction);

        let mut active: ActiveModel = row.into();
        active.likes = Set(json!(post.likes));
        active.dislikes = Set(json!(post.dislikes));
        active.number_of_likes = Set(count(post.number_of_likes)?);
        active.number_of_dislikes = Set(count(post.number_of_dislikes)?);

        let saved = active.update(&txn).await.map_err(map_db_err)?;
        txn.commit().await.map_err(map_db_err)?;

        to_post(&saved)
    }
}

fn map_db_err(e: DbErr) -> PromotionRepositoryError {
    PromotionRepositoryError::DatabaseError(e.to_string())
}

/// The only foreign key on `promotions` is the owner.
fn map_insert_err(e: DbErr) -> PromotionRepositoryError {
    let msg = e.to_string();
    if msg.contains("foreign key") || msg.contains("23503") {
        warn!("Promotion insert for a user that no longer exists");
        return PromotionRepositoryError::UnknownAuthor;
    }
    PromotionRepositoryError::DatabaseError(msg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::fixtures::promotion_row;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    #[tokio::test]
    async fn test_create_starts_without_reactions() {
        let owner = Uuid::new_v4();
        let row = promotion_row("Launch", owner);
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![row.clone()]])
            .into_connection();

        let repo = PromotionRepositoryPostgres::new(Arc::new(db));
        let post = repo
            .create(
                UserId::from(owner),
                PromotionData {
                    title: "Launch".to_string(),
                    description: "We shipped".to_string(),
                    link: "https://example.com".to_string(),
                },
            )
            .await
            .unwrap();

        assert_eq!(post.user, owner);
        assert!(post.likes.is_empty() && post.dislikes.is_empty());
    }

    #[tokio::test]
    async fn test_create_for_deleted_user() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom(
                "violates foreign key constraint \"fk_promotions_user\"".to_string(),
            )])
            .into_connection();

        let repo = PromotionRepositoryPostgres::new(Arc::new(db));
        let result = repo
            .create(
                UserId::from(Uuid::new_v4()),
                PromotionData {
                    title: "Launch".to_string(),
                    description: "We shipped".to_string(),
                    link: "https://example.com".to_string(),
                },
            )
            .await;

        assert!(matches!(result, Err(PromotionRepositoryError::UnknownAuthor)));
    }

    #[tokio::test]
    async fn test_react_locks_the_row_and_writes_the_toggle() {
        let owner = Uuid::new_v4();
        let reader = Uuid::new_v4();
        let row = promotion_row("Launch", owner);
        let mut saved = row.clone();
        saved.likes = json!([reader]);
        saved.number_of_likes = 1;

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results(vec![vec![row.clone()]])
                .append_query_results(vec![vec![saved]])
                .into_connection(),
        );

        let repo = PromotionRepositoryPostgres::new(db.clone());
        let post = repo
            .react(row.id, UserId::from(reader), Reaction::Like)
            .await
            .unwrap();
        drop(repo);

        assert_eq!(post.likes, vec![reader]);
        assert_eq!(post.number_of_likes, 1);

        let log = format!(
            "{:?}",
            Arc::try_unwrap(db).unwrap().into_transaction_log()
        );
        assert!(log.contains("FOR UPDATE"));
        assert!(log.contains(&reader.to_string()));
    }

    #[tokio::test]
    async fn test_react_on_missing_promotion() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<promotions::Model>::new()])
            .into_connection();

        let repo = PromotionRepositoryPostgres::new(Arc::new(db));
        let result = repo
            .react(Uuid::new_v4(), UserId::from(Uuid::new_v4()), Reaction::Dislike)
            .await;

        assert!(matches!(result, Err(PromotionRepositoryError::NotFound)));
    }

    #[tokio::test]
    async fn test_delete_missing_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = PromotionRepositoryPostgres::new(Arc::new(db));

        assert!(matches!(
            repo.delete(Uuid::new_v4()).await,
            Err(PromotionRepositoryError::NotFound)
        ));
    }
}
