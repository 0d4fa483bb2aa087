use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create project_technologies join table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(ProjectTechnologies::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(ProjectTechnologies::ProjectId).uuid().not_null())
                    .col(
                        ColumnDef::new(ProjectTechnologies::TechnologyId)
                            .uuid()
                            .not_null(),
                    )
                    // Composite primary key
                    .primary_key(
                        Index::create()
                            .col(ProjectTechnologies::ProjectId)
                            .col(ProjectTechnologies::TechnologyId),
                    )
                    // FK → projects
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_technologies_project_id")
                            .from(ProjectTechnologies::Table, ProjectTechnologies::ProjectId)
                            .to(Projects::Table, Projects::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    // FK → technologies
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_technologies_technology_id")
                            .from(ProjectTechnologies::Table, ProjectTechnologies::TechnologyId)
                            .to(Technologies::Table, Technologies::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Fast lookup: all projects tagged with a technology
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_project_technologies_technology_id
                ON project_technologies (technology_id);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_project_technologies_technology_id;")
            .await?;

        manager
            .drop_table(Table::drop().table(ProjectTechnologies::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ProjectTechnologies {
    Table,
    ProjectId,
    TechnologyId,
}

#[derive(DeriveIden)]
enum Projects {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Technologies {
    Table,
    Id,
}
