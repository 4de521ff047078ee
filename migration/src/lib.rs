pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_users_table;
mod m20250301_000002_create_hackathon_posts_table;
mod m20250301_000003_create_promotions_table;
mod m20250301_000004_create_jobs_table;
mod m20250301_000005_create_mentor_applications_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_users_table::Migration),
            Box::new(m20250301_000002_create_hackathon_posts_table::Migration),
            Box::new(m20250301_000003_create_promotions_table::Migration),
            Box::new(m20250301_000004_create_jobs_table::Migration),
            Box::new(m20250301_000005_create_mentor_applications_table::Migration),
        ]
    }
}
