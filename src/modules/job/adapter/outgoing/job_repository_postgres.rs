use async_trait::async_trait;
use chrono::Utc;
use hub_core::Job;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QuerySelect, Set, TransactionTrait,
};
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::job::adapter::outgoing::sea_orm_entity::jobs::{self, ActiveModel, Entity};
use crate::job::application::ports::outgoing::{JobData, JobRepository, JobRepositoryError};

#[derive(Clone)]
pub struct JobRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl JobRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn to_job(row: &jobs::Model) -> Result<Job, JobRepositoryError> {
    row.to_job()
        .map_err(|e| JobRepositoryError::SerializationError(e.to_string()))
}

fn signed<T: TryFrom<U>, U: Copy + std::fmt::Display>(
    value: Option<U>,
    column: &str,
) -> Result<Option<T>, JobRepositoryError> {
    value
        .map(|v| {
            T::try_from(v).map_err(|_| {
                JobRepositoryError::SerializationError(format!("{column} out of range: {v}"))
            })
        })
        .transpose()
}

#[async_trait]
impl JobRepository for JobRepositoryPostgres {
    async fn create(&self, poster: UserId, data: JobData) -> Result<Job, JobRepositoryError> {
        let now = Utc::now().fixed_offset();
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            posted_by: Set(poster.value()),
            title: Set(data.title),
            company: Set(data.company),
            description: Set(data.description),
            location: Set(data.location),
            job_type: Set(data.job_type),
            salary_min: Set(signed(data.salary.min, "salary_min")?),
            salary_max: Set(signed(data.salary.max, "salary_max")?),
            experience_min: Set(signed(data.experience.min, "experience_min")?),
            experience_max: Set(signed(data.experience.max, "experience_max")?),
            skills: Set(json!(data.skills)),
            applicants: Set(json!([])),
            apply_link: Set(data.apply_link),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_insert_err)?;
        to_job(&inserted)
    }

    async fn add_applicant(&self, id: Uuid, user: UserId) -> Result<Job, JobRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let row = Entity::find_by_id(id)
            .lock_exclusive()
            .one(&txn)
            .await
            .map_err(map_db_err)?;

        let Some(row) = row else {
            txn.rollback().await.map_err(map_db_err)?;
            return Err(JobRepositoryError::NotFound);
        };

        let mut job = to_job(&row)?;
        if job.applicants.contains(&user.value()) {
            txn.rollback().await.map_err(map_db_err)?;
            return Ok(job);
        }
        job.applicants.push(user.value());

        let mut active: ActiveModel = row.into();
        active.applicants = Set(json!(job.applicants));
        let saved = active.update(&txn).await.map_err(map_db_err)?;
        txn.commit().await.map_err(map_db_err)?;

        to_job(&saved)
    }
}

fn map_db_err(e: DbErr) -> JobRepositoryError {
    JobRepositoryError::DatabaseError(e.to_string())
}

fn map_insert_err(e: DbErr) -> JobRepositoryError {
    let msg = e.to_string();
    if msg.contains("foreign key") || msg.contains("23503") {
        return JobRepositoryError::UnknownPoster;
    }
    JobRepositoryError::DatabaseError(msg)
}
