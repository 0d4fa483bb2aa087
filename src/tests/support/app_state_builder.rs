use actix_web::web;
use std::sync::Arc;

use crate::modules::achievement::application::domain::entities::Achievement;
use crate::modules::certification::application::domain::entities::Certification;
use crate::modules::education::application::domain::entities::Education;
use crate::modules::experience::application::domain::entities::Experience;
use crate::modules::personal_info::application::domain::entities::PersonalInfo;
use crate::modules::project::application::domain::entities::Project;
use crate::modules::resource::application::domain::Resource;
use crate::modules::resource::application::ports::outgoing::BulkResourceRepository;
use crate::modules::resource::application::service::{BulkCreateService, ResourceService};
use crate::modules::skill::application::domain::entities::Skill;
use crate::modules::summary::application::ports::incoming::use_cases::GetSummaryUseCase;
use crate::modules::summary::application::service::GetSummaryService;
use crate::modules::technology::application::domain::entities::Technology;
use crate::tests::support::in_memory::InMemoryRepository;
use crate::tests::support::stubs::{empty_summary_sources, FixedRepository};
use crate::AppState;

/// Builds an [`AppState`] whose collections are empty and read-only unless
/// overridden.
pub struct TestAppStateBuilder {
    state: AppState,
}

fn read_only<R: Resource>() -> Arc<ResourceService<R, FixedRepository<R>>> {
    Arc::new(ResourceService::new(FixedRepository::empty()))
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        let skills = InMemoryRepository::<Skill>::default();

        Self {
            state: AppState {
                personal_info: read_only::<PersonalInfo>(),
                skills: Arc::new(ResourceService::new(skills.clone())),
                bulk_skills: Arc::new(BulkCreateService::new(skills)),
                technologies: read_only::<Technology>(),
                experiences: read_only::<Experience>(),
                education: read_only::<Education>(),
                projects: read_only::<Project>(),
                bulk_projects: Arc::new(BulkCreateService::new(
                    FixedRepository::<Project>::empty(),
                )),
                certifications: read_only::<Certification>(),
                achievements: read_only::<Achievement>(),
                summary: Arc::new(GetSummaryService::new(empty_summary_sources())),
            },
        }
    }
}

impl TestAppStateBuilder {
    /// Serves `/skills/` and `/skills/bulk/` from `repo`.
    pub fn with_skills<Repo>(mut self, repo: Repo) -> Self
    where
        Repo: BulkResourceRepository<Skill> + Clone + 'static,
    {
        self.state.skills = Arc::new(ResourceService::new(repo.clone()));
        self.state.bulk_skills = Arc::new(BulkCreateService::new(repo));
        self
    }

    pub fn with_summary(mut self, uc: impl GetSummaryUseCase + Send + Sync + 'static) -> Self {
        self.state.summary = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(self.state)
    }
}
