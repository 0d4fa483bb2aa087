use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PersonalInfo::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(PersonalInfo::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(PersonalInfo::Name).string_len(100).not_null())
                    .col(ColumnDef::new(PersonalInfo::Title).string_len(200).not_null())
                    .col(ColumnDef::new(PersonalInfo::Summary).text().not_null())
                    .col(
                        ColumnDef::new(PersonalInfo::LinkedinUrl)
                            .string_len(200)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(PersonalInfo::GithubUrl)
                            .string_len(200)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(PersonalInfo::Email)
                            .string_len(254)
                            .not_null()
                            .default("example@example.com"),
                    )
                    .col(
                        ColumnDef::new(PersonalInfo::Phone)
                            .string_len(20)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(PersonalInfo::Location)
                            .string_len(100)
                            .not_null()
                            .default("India"),
                    )
                    .col(
                        ColumnDef::new(PersonalInfo::LeetcodeProblems)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(PersonalInfo::LeetcodeRating)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(PersonalInfo::YearsExperience)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(PersonalInfo::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(PersonalInfo::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_personal_info_updated_at
                BEFORE UPDATE ON personal_info
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
                "DROP TRIGGER IF EXISTS update_personal_info_updated_at ON personal_info;",
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PersonalInfo::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum PersonalInfo {
    Table,
    Id,
    Name,
    Title,
    Summary,
    LinkedinUrl,
    GithubUrl,
    Email,
    Phone,
    Location,
    LeetcodeProblems,
    LeetcodeRating,
    YearsExperience,
    CreatedAt,
    UpdatedAt,
}
