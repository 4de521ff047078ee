use hub_core::{ExperienceRange, Job, SalaryRange};
use sea_orm::entity::prelude::*;

use crate::auth::adapter::outgoing::sea_orm_entity::users;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "jobs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub posted_by: Uuid,
    pub title: String,
    pub company: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub location: String,
    pub job_type: String,
    pub salary_min: Option<i64>,
    pub salary_max: Option<i64>,
    pub experience_min: Option<i32>,
    pub experience_max: Option<i32>,
    #[sea_orm(column_type = "JsonBinary")]
    pub skills: Json,
    #[sea_orm(column_type = "JsonBinary")]
    pub applicants: Json,
    pub apply_link: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "users::Entity",
        from = "Column::PostedBy",
        to = "users::Column::Id",
        on_delete = "Cascade"
    )]
    Poster,
}

impl Related<users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Poster.def()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RowError {
    #[error("json column: {0}")]
    Json(#[from] serde_json::Error),

    #[error("negative {0}")]
    Negative(&'static str),
}

fn unsigned<T, U: TryFrom<T>>(value: Option<T>, column: &'static str) -> Result<Option<U>, RowError> {
    value
        .map(|v| U::try_from(v).map_err(|_| RowError::Negative(column)))
        .transpose()
}

impl Model {
    pub fn to_job(&self) -> Result<Job, RowError> {
        Ok(Job {
            id: self.id,
            title: self.title.clone(),
            company: self.company.clone(),
            description: self.description.clone(),
            location: self.location.clone(),
            salary: SalaryRange {
                min: unsigned(self.salary_min, "salary_min")?,
                max: unsigned(self.salary_max, "salary_max")?,
            },
            job_type: self.job_type.clone(),
            experience: ExperienceRange {
                min: unsigned(self.experience_min, "experience_min")?,
                max: unsigned(self.experience_max, "experience_max")?,
            },
            skills: serde_json::from_value(self.skills.clone())?,
            created_at: self.created_at.into(),
            applicants: serde_json::from_value(self.applicants.clone())?,
            apply_link: self.apply_link.clone(),
            posted_by: self.posted_by,
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
