mod authors;
mod hackathon_query_postgres;
mod hackathon_repository_postgres;
pub mod sea_orm_entity;

pub use hackathon_query_postgres::HackathonQueryPostgres;
pub use hackathon_repository_postgres::HackathonRepositoryPostgres;
