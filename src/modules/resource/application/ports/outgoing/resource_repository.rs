use async_trait::async_trait;
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::modules::resource::application::domain::Resource;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RepositoryError {
    #[error("Record not found")]
    NotFound,

    /// Technology ids that name no stored technology, keyed by the position of
    /// the offending item in the write (always 0 for single-record writes).
    #[error("Unknown technology ids")]
    UnknownTechnologies(BTreeMap<usize, Vec<Uuid>>),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Ports
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ResourceRepository<R: Resource>: Send + Sync {
    /// All records in the collection's fixed order.
    async fn list(&self) -> Result<Vec<R>, RepositoryError>;

    async fn get(&self, id: Uuid) -> Result<R, RepositoryError>;

    /// Inserts a new record; fields missing from `changes` take their defaults.
    async fn create(&self, changes: R::Changes) -> Result<R, RepositoryError>;

    /// Merges `changes` into the stored record; missing fields keep their value.
    async fn update(&self, id: Uuid, changes: R::Changes) -> Result<R, RepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}

#[async_trait]
pub trait BulkResourceRepository<R: Resource>: ResourceRepository<R> {
    /// Inserts every item in one transaction and returns them in input order.
    async fn create_many(&self, items: Vec<R::Changes>) -> Result<Vec<R>, RepositoryError>;
}
