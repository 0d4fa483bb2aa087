use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use crate::modules::resource::application::domain::Resource;
use crate::shared::validation::{FieldErrors, WriteMode};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

/// Rejected input: one map for a single record, one map per item for batches
/// (valid items get an empty map so positions line up with the request).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ValidationErrors {
    Fields(FieldErrors),
    Batch(Vec<FieldErrors>),
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ResourceError {
    #[error("Validation failed")]
    Validation(ValidationErrors),

    #[error("Not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<FieldErrors> for ResourceError {
    fn from(errors: FieldErrors) -> Self {
        ResourceError::Validation(ValidationErrors::Fields(errors))
    }
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ResourceUseCase<R: Resource>: Send + Sync {
    async fn list(&self) -> Result<Vec<R>, ResourceError>;

    async fn get(&self, id: Uuid) -> Result<R, ResourceError>;

    async fn create(&self, payload: R::Payload) -> Result<R, ResourceError>;

    /// `mode` is either [`WriteMode::Replace`] (PUT) or [`WriteMode::Partial`] (PATCH).
    async fn update(
        &self,
        id: Uuid,
        payload: R::Payload,
        mode: WriteMode,
    ) -> Result<R, ResourceError>;

    async fn delete(&self, id: Uuid) -> Result<(), ResourceError>;
}
