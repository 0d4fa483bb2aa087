use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Certifications::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Certifications::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Certifications::Name).string_len(200).not_null())
                    .col(ColumnDef::new(Certifications::Issuer).string_len(200).not_null())
                    .col(ColumnDef::new(Certifications::IssueDate).date().not_null())
                    .col(ColumnDef::new(Certifications::ExpiryDate).date())
                    .col(
                        ColumnDef::new(Certifications::CredentialUrl)
                            .string_len(200)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Certifications::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Certifications::UpdatedAt)
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
                CREATE TRIGGER update_certifications_updated_at
                BEFORE UPDATE ON certifications
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
                "DROP TRIGGER IF EXISTS update_certifications_updated_at ON certifications;",
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Certifications::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Certifications {
    Table,
    Id,
    Name,
    Issuer,
    IssueDate,
    ExpiryDate,
    CredentialUrl,
    CreatedAt,
    UpdatedAt,
}
