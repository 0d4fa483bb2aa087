pub use sea_orm_migration::prelude::*;

mod m20261016_000001_create_updated_at_function;
mod m20261016_000002_create_table_personal_info;
mod m20261016_000003_create_table_skills;
mod m20261016_000004_create_table_technologies;
mod m20261016_000005_create_table_experiences;
mod m20261016_000006_create_table_experience_technologies;
mod m20261016_000007_create_table_education;
mod m20261016_000008_create_table_projects;
mod m20261016_000009_create_table_project_technologies;
mod m20261016_000010_create_table_certifications;
mod m20261016_000011_create_table_achievements;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261016_000001_create_updated_at_function::Migration),
            Box::new(m20261016_000002_create_table_personal_info::Migration),
            Box::new(m20261016_000003_create_table_skills::Migration),
            Box::new(m20261016_000004_create_table_technologies::Migration),
            Box::new(m20261016_000005_create_table_experiences::Migration),
            Box::new(m20261016_000006_create_table_experience_technologies::Migration),
            Box::new(m20261016_000007_create_table_education::Migration),
            Box::new(m20261016_000008_create_table_projects::Migration),
            Box::new(m20261016_000009_create_table_project_technologies::Migration),
            Box::new(m20261016_000010_create_table_certifications::Migration),
            Box::new(m20261016_000011_create_table_achievements::Migration),
        ]
    }
}
