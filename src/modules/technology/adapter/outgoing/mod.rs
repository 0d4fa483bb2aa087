pub mod sea_orm_entity;
pub mod technology_links;
mod technology_repository_postgres;

pub use technology_repository_postgres::TechnologyRepositoryPostgres;
