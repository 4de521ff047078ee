use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MentorApplications::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MentorApplications::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    // One application per user.
                    .col(
                        ColumnDef::new(MentorApplications::UserId)
                            .uuid()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(MentorApplications::Expertise)
                            .json_binary()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(MentorApplications::ExperienceYears)
                            .integer()
                            .not_null()
                            .check(Expr::col(MentorApplications::ExperienceYears).gte(0)),
                    )
                    .col(ColumnDef::new(MentorApplications::Bio).text().not_null())
                    .col(ColumnDef::new(MentorApplications::Linkedin).text())
                    .col(
                        ColumnDef::new(MentorApplications::Availability)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(MentorApplications::Status)
                            .string_len(20)
                            .not_null()
                            .default("Pending"),
                    )
                    .col(
                        ColumnDef::new(MentorApplications::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(MentorApplications::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_mentor_applications_user_id")
                            .from(MentorApplications::Table, MentorApplications::UserId)
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
                CREATE INDEX IF NOT EXISTS idx_mentor_applications_status
                ON mentor_applications (status, created_at DESC);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_mentor_applications_updated_at
                BEFORE UPDATE ON mentor_applications
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
                "DROP TRIGGER IF EXISTS update_mentor_applications_updated_at ON mentor_applications",
            )
            .await?;

        manager
            .drop_table(Table::drop().table(MentorApplications::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum MentorApplications {
    Table,
    Id,
    UserId,
    Expertise,
    ExperienceYears,
    Bio,
    Linkedin,
    Availability,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
