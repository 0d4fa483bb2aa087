use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create experience_technologies join table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(ExperienceTechnologies::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ExperienceTechnologies::ExperienceId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ExperienceTechnologies::TechnologyId)
                            .uuid()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(ExperienceTechnologies::ExperienceId)
                            .col(ExperienceTechnologies::TechnologyId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_experience_technologies_experience_id")
                            .from(
                                ExperienceTechnologies::Table,
                                ExperienceTechnologies::ExperienceId,
                            )
                            .to(Experiences::Table, Experiences::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_experience_technologies_technology_id")
                            .from(
                                ExperienceTechnologies::Table,
                                ExperienceTechnologies::TechnologyId,
                            )
                            .to(Technologies::Table, Technologies::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Fast lookup: all experiences tagged with a technology
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_experience_technologies_technology_id
                ON experience_technologies (technology_id);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                "DROP INDEX IF EXISTS idx_experience_technologies_technology_id;",
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ExperienceTechnologies::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ExperienceTechnologies {
    Table,
    ExperienceId,
    TechnologyId,
}

#[derive(DeriveIden)]
enum Experiences {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Technologies {
    Table,
    Id,
}
