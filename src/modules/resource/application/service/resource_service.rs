use async_trait::async_trait;
use std::marker::PhantomData;
use uuid::Uuid;

use crate::modules::resource::application::domain::Resource;
use crate::modules::resource::application::ports::incoming::use_cases::{
    ResourceError, ResourceUseCase,
};
use crate::modules::resource::application::ports::outgoing::{
    RepositoryError, ResourceRepository,
};
use crate::shared::validation::{FieldErrors, WriteMode};

pub const TECHNOLOGY_IDS: &str = "technology_ids";

/// Field errors for technology ids that name no stored technology.
pub fn unknown_technologies(ids: &[Uuid]) -> FieldErrors {
    let mut errors = FieldErrors::new();
    for id in ids {
        errors.add(
            TECHNOLOGY_IDS,
            format!("Invalid pk \"{id}\" - object does not exist."),
        );
    }
    errors
}

pub fn map_repository_error(e: RepositoryError) -> ResourceError {
    match e {
        RepositoryError::NotFound => ResourceError::NotFound,
        RepositoryError::UnknownTechnologies(missing) => {
            let ids: Vec<Uuid> = missing.into_values().flatten().collect();
            ResourceError::from(unknown_technologies(&ids))
        }
        RepositoryError::DatabaseError(msg) => ResourceError::RepositoryError(msg),
    }
}

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct ResourceService<R, Repo>
where
    R: Resource,
    Repo: ResourceRepository<R>,
{
    repository: Repo,
    _resource: PhantomData<fn() -> R>,
}

impl<R, Repo> ResourceService<R, Repo>
where
    R: Resource,
    Repo: ResourceRepository<R>,
{
    pub fn new(repository: Repo) -> Self {
        Self {
            repository,
            _resource: PhantomData,
        }
    }
}

#[async_trait]
impl<R, Repo> ResourceUseCase<R> for ResourceService<R, Repo>
where
    R: Resource,
    Repo: ResourceRepository<R>,
{
    async fn list(&self) -> Result<Vec<R>, ResourceError> {
        self.repository.list().await.map_err(map_repository_error)
    }

    async fn get(&self, id: Uuid) -> Result<R, ResourceError> {
        self.repository.get(id).await.map_err(map_repository_error)
    }

    async fn create(&self, payload: R::Payload) -> Result<R, ResourceError> {
        let changes = R::validate(payload, WriteMode::Create)?;

        self.repository
            .create(changes)
            .await
            .map_err(map_repository_error)
    }

    async fn update(
        &self,
        id: Uuid,
        payload: R::Payload,
        mode: WriteMode,
    ) -> Result<R, ResourceError> {
        let changes = R::validate(payload, mode)?;

        self.repository
            .update(id, changes)
            .await
            .map_err(map_repository_error)
    }

    async fn delete(&self, id: Uuid) -> Result<(), ResourceError> {
        self.repository.delete(id).await.map_err(map_repository_error)
    }
}
