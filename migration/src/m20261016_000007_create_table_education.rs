use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Education::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Education::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Education::Institution).string_len(200).not_null())
                    .col(ColumnDef::new(Education::Degree).string_len(100).not_null())
                    .col(
                        ColumnDef::new(Education::FieldOfStudy)
                            .string_len(100)
                            .not_null()
                            .default("Computer Science"),
                    )
                    .col(ColumnDef::new(Education::StartYear).integer().not_null())
                    .col(ColumnDef::new(Education::EndYear).integer())
                    .col(
                        ColumnDef::new(Education::IsCurrent)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Education::Cgpa)
                            .string_len(20)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Education::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Education::UpdatedAt)
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
                CREATE TRIGGER update_education_updated_at
                BEFORE UPDATE ON education
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
            .execute_unprepared("DROP TRIGGER IF EXISTS update_education_updated_at ON education;")
            .await?;

        manager
            .drop_table(Table::drop().table(Education::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Education {
    Table,
    Id,
    Institution,
    Degree,
    FieldOfStudy,
    StartYear,
    EndYear,
    IsCurrent,
    Cgpa,
    CreatedAt,
    UpdatedAt,
}
