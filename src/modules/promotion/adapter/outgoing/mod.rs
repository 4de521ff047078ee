mod promotion_query_postgres;
mod promotion_repository_postgres;
pub mod sea_orm_entity;

pub use promotion_query_postgres::PromotionQueryPostgres;
pub use promotion_repository_postgres::PromotionRepositoryPostgres;
