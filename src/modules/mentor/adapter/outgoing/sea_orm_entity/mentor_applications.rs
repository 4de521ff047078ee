use hub_core::{MentorApplication, UnknownVariant};
use sea_orm::entity::prelude::*;

use crate::auth::adapter::outgoing::sea_orm_entity::users;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "mentor_applications")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// One application per user.
    #[sea_orm(unique)]
    pub user_id: Uuid,
    #[sea_orm(column_type = "JsonBinary")]
    pub expertise: Json,
    pub experience_years: i32,
    #[sea_orm(column_type = "Text")]
    pub bio: String,
    pub linkedin: Option<String>,
    pub availability: String,
    pub status: String,
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
    #[error("expertise column: {0}")]
    Expertise(#[from] serde_json::Error),

    #[error(transparent)]
    Status(#[from] UnknownVariant),

    #[error("negative experience_years: {0}")]
    Years(i32),
}

impl Model {
    pub fn to_application(&self) -> Result<MentorApplication, RowError> {
        Ok(MentorApplication {
            id: self.id,
            user: self.user_id,
            expertise: serde_json::from_value(self.expertise.clone())?,
            experience_years: u32::try_from(self.experience_years)
                .map_err(|_| RowError::Years(self.experience_years))?,
            bio: self.bio.clone(),
            linkedin: self.linkedin.clone(),
            availability: self.availability.clone(),
            status: self.status.parse()?,
            created_at: self.created_at.into(),
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
