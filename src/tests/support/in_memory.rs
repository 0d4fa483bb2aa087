//! Vec-backed implementations of the outgoing ports.
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::modules::resource::application::domain::Resource;
use crate::modules::resource::application::ports::outgoing::{
    BulkResourceRepository, RepositoryError, ResourceRepository,
};

/// Builds a record from a validated change set, falling back to `existing`
/// for absent fields and to the column default when there is none.
pub trait Materialize: Resource {
    fn materialize(id: Uuid, changes: Self::Changes, existing: Option<&Self>) -> Self;
}

/// Clones share the same records.
pub struct InMemoryRepository<R> {
    records: Arc<Mutex<Vec<R>>>,
    failure: Option<RepositoryError>,
}

impl<R> Clone for InMemoryRepository<R> {
    fn clone(&self) -> Self {
        Self {
            records: Arc::clone(&self.records),
            failure: self.failure.clone(),
        }
    }
}

impl<R> Default for InMemoryRepository<R> {
    fn default() -> Self {
        Self {
            records: Arc::new(Mutex::new(vec![])),
            failure: None,
        }
    }
}

impl<R: Clone> InMemoryRepository<R> {
    pub fn with_records(records: Vec<R>) -> Self {
        Self {
            records: Arc::new(Mutex::new(records)),
            failure: None,
        }
    }

    /// Every call fails with `error`.
    pub fn failing(error: RepositoryError) -> Self {
        Self {
            records: Arc::new(Mutex::new(vec![])),
            failure: Some(error),
        }
    }

    pub fn records(&self) -> Vec<R> {
        self.records.lock().unwrap().clone()
    }

    fn check(&self) -> Result<(), RepositoryError> {
        match &self.failure {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl<R: Materialize> ResourceRepository<R> for InMemoryRepository<R> {
    async fn list(&self) -> Result<Vec<R>, RepositoryError> {
        self.check()?;
        Ok(self.records())
    }

    async fn get(&self, id: Uuid) -> Result<R, RepositoryError> {
        self.check()?;
        self.records
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id() == id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn create(&self, changes: R::Changes) -> Result<R, RepositoryError> {
        self.check()?;
        let record = R::materialize(Uuid::new_v4(), changes, None);
        self.records.lock().unwrap().push(record.clone());
        Ok(record)
    }

    async fn update(&self, id: Uuid, changes: R::Changes) -> Result<R, RepositoryError> {
        self.check()?;
        let mut records = self.records.lock().unwrap();
        let slot = records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or(RepositoryError::NotFound)?;
        *slot = R::materialize(id, changes, Some(&*slot));
        Ok(slot.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        self.check()?;
        let mut records = self.records.lock().unwrap();
        let before = records.len();
        records.retain(|r| r.id() != id);
        if records.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl<R: Materialize> BulkResourceRepository<R> for InMemoryRepository<R> {
    async fn create_many(&self, items: Vec<R::Changes>) -> Result<Vec<R>, RepositoryError> {
        self.check()?;
        let created: Vec<R> = items
            .into_iter()
            .map(|changes| R::materialize(Uuid::new_v4(), changes, None))
            .collect();
        self.records.lock().unwrap().extend(created.iter().cloned());
        Ok(created)
    }
}
