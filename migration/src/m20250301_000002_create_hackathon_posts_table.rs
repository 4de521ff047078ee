use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(HackathonPosts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(HackathonPosts::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(HackathonPosts::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(HackathonPosts::HackathonName)
                            .string_len(150)
                            .not_null(),
                    )
                    .col(ColumnDef::new(HackathonPosts::HackathonLink).text().not_null())
                    .col(ColumnDef::new(HackathonPosts::Description).text().not_null())
                    .col(
                        ColumnDef::new(HackathonPosts::Skills)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(HackathonPosts::Location)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(ColumnDef::new(HackathonPosts::City).string_len(100))
                    .col(
                        ColumnDef::new(HackathonPosts::TeammatesRequired)
                            .integer()
                            .not_null()
                            .default(1)
                            .check(Expr::col(HackathonPosts::TeammatesRequired).gte(1)),
                    )
                    .col(
                        ColumnDef::new(HackathonPosts::Status)
                            .string_len(20)
                            .not_null()
                            .default("Open"),
                    )
                    .col(ColumnDef::new(HackathonPosts::Prize).string_len(255))
                    .col(ColumnDef::new(HackathonPosts::StartDate).timestamp_with_time_zone())
                    .col(ColumnDef::new(HackathonPosts::EndDate).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(HackathonPosts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(HackathonPosts::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_hackathon_posts_user_id")
                            .from(HackathonPosts::Table, HackathonPosts::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_hackathon_posts_user_id
                ON hackathon_posts (user_id);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_hackathon_posts_created_at
                ON hackathon_posts (created_at DESC);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_hackathon_posts_updated_at
                BEFORE UPDATE ON hackathon_posts
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                "DROP TRIGGER IF EXISTS update_hackathon_posts_updated_at ON hackathon_posts",
            )
            .await?;

        manager
            .drop_table(Table::drop().table(HackathonPosts::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum HackathonPosts {
    Table,
    Id,
    UserId,
    HackathonName,
    HackathonLink,
    Description,
    Skills,
    Location,
    City,
    TeammatesRequired,
    Status,
    Prize,
    StartDate,
    EndDate,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
