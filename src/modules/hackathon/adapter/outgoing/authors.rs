use hub_core::PostAuthor;
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};
use std::collections::HashMap;
use uuid::Uuid;

use crate::auth::adapter::outgoing::sea_orm_entity::users;

/// Author summaries for `ids`, keyed by user id. Unknown ids are absent.
pub(super) async fn load_authors<C>(
    db: &C,
    ids: impl IntoIterator<Item = Uuid>,
) -> Result<HashMap<Uuid, PostAuthor>, DbErr>
where
    C: ConnectionTrait,
{
    let mut ids: Vec<Uuid> = ids.into_iter().collect();
    ids.sort_unstable();
    ids.dedup();
    if ids.is_empty() {
        return Ok(HashMap::new());
    }

    let rows = users::Entity::find()
        .filter(users::Column::Id.is_in(ids))
        .all(db)
        .await?;

    Ok(rows.iter().map(|u| (u.id, u.to_author())).collect())
}

pub(super) async fn load_author<C>(db: &C, id: Uuid) -> Result<Option<PostAuthor>, DbErr>
where
    C: ConnectionTrait,
{
    Ok(users::Entity::find_by_id(id)
        .one(db)
        .await?
        .map(|u| u.to_author()))
}
