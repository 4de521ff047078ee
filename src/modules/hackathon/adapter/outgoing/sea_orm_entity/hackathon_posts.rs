use hub_core::{HackathonPost, PostAuthor, UnknownVariant};
use sea_orm::entity::prelude::*;

use crate::auth::adapter::outgoing::sea_orm_entity::users;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "hackathon_posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub hackathon_name: String,
    pub hackathon_link: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub skills: Json,
    pub location: String,
    pub city: Option<String>,
    pub teammates_required: i32,
    pub status: String,
    pub prize: Option<String>,
    pub start_date: Option<DateTimeWithTimeZone>,
    pub end_date: Option<DateTimeWithTimeZone>,
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

#[derive(Debug, thiserror::Error)]
pub enum RowError {
    #[error("skills column: {0}")]
    Skills(#[from] serde_json::Error),

    #[error(transparent)]
    Status(#[from] UnknownVariant),

    #[error("teammates_required out of range: {0}")]
    Teammates(i32),
}

impl Model {
    pub fn to_post(&self, author: PostAuthor) -> Result<HackathonPost, RowError> {
        Ok(HackathonPost {
            id: self.id,
            hackathon_name: self.hackathon_name.clone(),
            hackathon_link: self.hackathon_link.clone(),
            description: self.description.clone(),
            skills: serde_json::from_value(self.skills.clone())?,
            location: self.location.clone(),
            city: self.city.clone(),
            teammates_required: u32::try_from(self.teammates_required)
                .map_err(|_| RowError::Teammates(self.teammates_required))?,
            status: self.status.parse()?,
            prize: self.prize.clone(),
            start_date: self.start_date.map(Into::into),
            end_date: self.end_date.map(Into::into),
            created_at: self.created_at.into(),
            user: author,
        })
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
