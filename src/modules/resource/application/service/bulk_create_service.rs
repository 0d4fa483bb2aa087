use async_trait::async_trait;
use std::marker::PhantomData;

use crate::modules::resource::application::domain::Resource;
use crate::modules::resource::application::ports::incoming::use_cases::{
    BulkCreateUseCase, ResourceError, ValidationErrors,
};
use crate::modules::resource::application::ports::outgoing::{
    BulkResourceRepository, RepositoryError,
};
use crate::modules::resource::application::service::resource_service::{
    map_repository_error, unknown_technologies,
};
use crate::shared::validation::{FieldErrors, WriteMode};

pub struct BulkCreateService<R, Repo>
where
    R: Resource,
    Repo: BulkResourceRepository<R>,
{
    repository: Repo,
    _resource: PhantomData<fn() -> R>,
}

impl<R, Repo> BulkCreateService<R, Repo>
where
    R: Resource,
    Repo: BulkResourceRepository<R>,
{
    pub fn new(repository: Repo) -> Self {
        Self {
            repository,
            _resource: PhantomData,
        }
    }
}

#[async_trait]
impl<R, Repo> BulkCreateUseCase<R> for BulkCreateService<R, Repo>
where
    R: Resource,
    Repo: BulkResourceRepository<R>,
{
    async fn execute(&self, payloads: Vec<R::Payload>) -> Result<Vec<R>, ResourceError> {
        if payloads.is_empty() {
            return Ok(vec![]);
        }

        let mut items = Vec::with_capacity(payloads.len());
        let mut errors = Vec::with_capacity(payloads.len());
        let mut rejected = false;

        // Every item is checked so the response reports all failures at once
        for payload in payloads {
            match R::validate(payload, WriteMode::Create) {
                Ok(changes) => {
                    items.push(changes);
                    errors.push(FieldErrors::new());
                }
                Err(e) => {
                    rejected = true;
                    errors.push(e);
                }
            }
        }

        if rejected {
            return Err(ResourceError::Validation(ValidationErrors::Batch(errors)));
        }

        let count = items.len();

        self.repository
            .create_many(items)
            .await
            .map_err(|e| match e {
                RepositoryError::UnknownTechnologies(missing) => {
                    let mut errors = vec![FieldErrors::new(); count];
                    for (index, ids) in missing {
                        if let Some(slot) = errors.get_mut(index) {
                            *slot = unknown_technologies(&ids);
                        }
                    }
                    ResourceError::Validation(ValidationErrors::Batch(errors))
                }
                other => map_repository_error(other),
            })
    }
}
