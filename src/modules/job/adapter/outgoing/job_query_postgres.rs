use async_trait::async_trait;
use hub_core::jobs::JobQuery;
use hub_core::Job;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Select,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::job::adapter::outgoing::sea_orm_entity::jobs::{self, Column, Entity};
use crate::job::application::ports::outgoing::{JobPage, JobQueryError, JobSearch};

#[derive(Clone)]
pub struct JobQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl JobQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

/// `%term%` with LIKE wildcards in the term matched literally.
fn contains_pattern(term: &str) -> String {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}

/// Every filter of the job board, without ordering or paging.
fn filtered(query: &JobQuery) -> Select<Entity> {
    let mut select = Entity::find();

    if let Some(term) = query.search_term() {
        let pattern = contains_pattern(term);
        select = select.filter(
            Condition::any()
                .add(Expr::col(Column::Title).ilike(&pattern))
                .add(Expr::col(Column::Company).ilike(&pattern))
                .add(Expr::cust_with_values("skills::text ILIKE ?", [pattern.clone()])),
        );
    }

    if let Some(location) = query.location_term() {
        select = select.filter(Expr::col(Column::Location).ilike(contains_pattern(location)));
    }

    if let Some(job_type) = query.job_type_term() {
        select = select
            .filter(Expr::expr(Func::lower(Expr::col(Column::JobType))).eq(job_type.to_lowercase()));
    }

    if let Some(years) = query.experience {
        let years = i32::try_from(years).unwrap_or(i32::MAX);
        select = select
            .filter(
                Condition::any()
                    .add(Column::ExperienceMin.is_null())
                    .add(Column::ExperienceMin.lte(years)),
            )
            .filter(
                Condition::any()
                    .add(Column::ExperienceMax.is_null())
                    .add(Column::ExperienceMax.gte(years)),
            );
    }

    select
}

fn to_job(row: &jobs::Model) -> Result<Job, JobQueryError> {
    row.to_job()
        .map_err(|e| JobQueryError::CorruptRow(format!("job {}: {}", row.id, e)))
}

fn map_db_err(e: DbErr) -> JobQueryError {
    JobQueryError::DatabaseError(e.to_string())
}

#[async_trait]
impl JobSearch for JobQueryPostgres {
    async fn search(&self, query: &JobQuery) -> Result<JobPage, JobQueryError> {
        let select = filtered(query);

        let total = select.clone().count(&*self.db).await.map_err(map_db_err)?;

        let rows = select
            .order_by_desc(Column::CreatedAt)
            .offset(query.offset())
            .limit(query.limit())
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let jobs = rows.iter().map(to_job).collect::<Result<Vec<_>, _>>()?;
        Ok(JobPage { jobs, total })
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Job>, JobQueryError> {
        Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .as_ref()
            .map(to_job)
            .transpose()
    }
}
