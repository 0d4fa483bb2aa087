use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Technologies::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Technologies::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Technologies::Name).string_len(100).not_null())
                    .col(
                        ColumnDef::new(Technologies::Description)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Technologies::Icon)
                            .string_len(50)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Technologies::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Technologies::UpdatedAt)
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
                CREATE TRIGGER update_technologies_updated_at
                BEFORE UPDATE ON technologies
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
                "DROP TRIGGER IF EXISTS update_technologies_updated_at ON technologies;",
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Technologies::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Technologies {
    Table,
    Id,
    Name,
    Description,
    Icon,
    CreatedAt,
    UpdatedAt,
}
