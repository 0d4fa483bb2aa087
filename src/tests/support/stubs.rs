//! Fixed-answer implementations of the read ports and the summary use case.
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::personal_info::application::domain::entities::PersonalInfo;
use crate::modules::personal_info::application::ports::outgoing::PersonalInfoQuery;
use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::outgoing::FeaturedProjectsQuery;
use crate::modules::resource::application::domain::Resource;
use crate::modules::resource::application::ports::outgoing::{
    BulkResourceRepository, RepositoryError, ResourceRepository,
};
use crate::modules::summary::application::domain::entities::PortfolioSummary;
use crate::modules::summary::application::ports::incoming::use_cases::{
    GetSummaryError, GetSummaryUseCase,
};
use crate::modules::summary::application::service::SummarySources;

// ============================================================
// FixedRepository
// ============================================================

/// Read-only repository returning a fixed list. Writes are refused.
pub struct FixedRepository<R> {
    result: Result<Vec<R>, RepositoryError>,
}

impl<R> FixedRepository<R> {
    pub fn new(records: Vec<R>) -> Self {
        Self {
            result: Ok(records),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    pub fn failing(error: RepositoryError) -> Self {
        Self { result: Err(error) }
    }
}

fn read_only() -> RepositoryError {
    RepositoryError::DatabaseError("read-only test repository".to_string())
}

#[async_trait]
impl<R: Resource> ResourceRepository<R> for FixedRepository<R> {
    async fn list(&self) -> Result<Vec<R>, RepositoryError> {
        self.result.clone()
    }

    async fn get(&self, id: Uuid) -> Result<R, RepositoryError> {
        self.result
            .clone()?
            .into_iter()
            .find(|r| r.id() == id)
            .ok_or(RepositoryError::NotFound)
    }

    async fn create(&self, _changes: R::Changes) -> Result<R, RepositoryError> {
        Err(read_only())
    }

    async fn update(&self, _id: Uuid, _changes: R::Changes) -> Result<R, RepositoryError> {
        Err(read_only())
    }

    async fn delete(&self, _id: Uuid) -> Result<(), RepositoryError> {
        Err(read_only())
    }
}

#[async_trait]
impl<R: Resource> BulkResourceRepository<R> for FixedRepository<R> {
    async fn create_many(&self, _items: Vec<R::Changes>) -> Result<Vec<R>, RepositoryError> {
        Err(read_only())
    }
}

// ============================================================
// Summary read ports
// ============================================================

pub struct FixedPersonalInfo {
    result: Result<Option<PersonalInfo>, RepositoryError>,
}

impl FixedPersonalInfo {
    pub fn new(result: Result<Option<PersonalInfo>, RepositoryError>) -> Self {
        Self { result }
    }
}

#[async_trait]
impl PersonalInfoQuery for FixedPersonalInfo {
    async fn first(&self) -> Result<Option<PersonalInfo>, RepositoryError> {
        self.result.clone()
    }
}

pub struct FixedFeaturedProjects {
    result: Result<Vec<Project>, RepositoryError>,
}

impl FixedFeaturedProjects {
    pub fn new(result: Result<Vec<Project>, RepositoryError>) -> Self {
        Self { result }
    }
}

#[async_trait]
impl FeaturedProjectsQuery for FixedFeaturedProjects {
    async fn list_featured(&self) -> Result<Vec<Project>, RepositoryError> {
        self.result.clone()
    }
}

/// Sources that all answer with nothing.
pub fn empty_summary_sources() -> SummarySources {
    SummarySources {
        personal_info: Arc::new(FixedPersonalInfo::new(Ok(None))),
        skills: Arc::new(FixedRepository::empty()),
        experiences: Arc::new(FixedRepository::empty()),
        education: Arc::new(FixedRepository::empty()),
        featured_projects: Arc::new(FixedFeaturedProjects::new(Ok(vec![]))),
        certifications: Arc::new(FixedRepository::empty()),
        achievements: Arc::new(FixedRepository::empty()),
    }
}

// ============================================================
// StubSummaryUseCase
// ============================================================

pub struct StubSummaryUseCase {
    result: Result<PortfolioSummary, GetSummaryError>,
}

impl StubSummaryUseCase {
    pub fn new(result: Result<PortfolioSummary, GetSummaryError>) -> Self {
        Self { result }
    }
}

#[async_trait]
impl GetSummaryUseCase for StubSummaryUseCase {
    async fn execute(&self) -> Result<PortfolioSummary, GetSummaryError> {
        self.result.clone()
    }
}
