use hub_core::PromotionPost;
use sea_orm::entity::prelude::*;

use crate::auth::adapter::outgoing::sea_orm_entity::users;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "promotions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub link: String,
    /// Ids of users who liked the post.
    #[sea_orm(column_type = "JsonBinary")]
    pub likes: Json,
    #[sea_orm(column_type = "JsonBinary")]
    pub dislikes: Json,
    pub number_of_likes: i32,
    pub number_of_dislikes: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "users::Entity",
        from = "Column::UserId",
        to = "users::Column::Id",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Model {
    /// Counts are recomputed from the id lists, so a drifted counter
    /// column never reaches a client.
    pub fn to_post(&self) -> Result<PromotionPost, serde_json::Error> {
        let mut post = PromotionPost {
            id: self.id,
            title: self.title.clone(),
            description: self.description.clone(),
            link: self.link.clone(),
            likes: serde_json::from_value(self.likes.clone())?,
            dislikes: serde_json::from_value(self.dislikes.clone())?,
            number_of_likes: 0,
            number_of_dislikes: 0,
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
            user: self.user_id,
        };
        post.recount();
        Ok(post)
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        #[cfg(feature = "no_db_triggers")]
        {
            use sea_orm::ActiveValue::Set;

            if !_insert {
                self.updated_at = Set(chrono::Utc::now().into());
            }
        }

        Ok(self)
    }
}
