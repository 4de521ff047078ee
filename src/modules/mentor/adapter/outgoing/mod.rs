mod mentor_query_postgres;
mod mentor_repository_postgres;
pub mod sea_orm_entity;

pub use mentor_query_postgres::MentorQueryPostgres;
pub use mentor_repository_postgres::MentorRepositoryPostgres;
