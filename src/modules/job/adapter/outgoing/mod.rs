mod job_query_postgres;
mod job_repository_postgres;
pub mod sea_orm_entity;

pub use job_query_postgres::JobQueryPostgres;
pub use job_repository_postgres::JobRepositoryPostgres;
