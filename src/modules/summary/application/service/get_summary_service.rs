use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::achievement::application::domain::entities::Achievement;
use crate::modules::certification::application::domain::entities::Certification;
use crate::modules::education::application::domain::entities::Education;
use crate::modules::experience::application::domain::entities::Experience;
use crate::modules::personal_info::application::ports::outgoing::PersonalInfoQuery;
use crate::modules::project::application::ports::outgoing::FeaturedProjectsQuery;
use crate::modules::resource::application::ports::outgoing::ResourceRepository;
use crate::modules::skill::application::domain::entities::Skill;
use crate::modules::summary::application::domain::entities::PortfolioSummary;
use crate::modules::summary::application::ports::incoming::use_cases::{
    GetSummaryError, GetSummaryUseCase,
};

// ============================================================================
// Service Implementation
// ============================================================================

/// Read ports the summary is assembled from.
#[derive(Clone)]
pub struct SummarySources {
    pub personal_info: Arc<dyn PersonalInfoQuery>,
    pub skills: Arc<dyn ResourceRepository<Skill>>,
    pub experiences: Arc<dyn ResourceRepository<Experience>>,
    pub education: Arc<dyn ResourceRepository<Education>>,
    pub featured_projects: Arc<dyn FeaturedProjectsQuery>,
    pub certifications: Arc<dyn ResourceRepository<Certification>>,
    pub achievements: Arc<dyn ResourceRepository<Achievement>>,
}

pub struct GetSummaryService {
    sources: SummarySources,
}

impl GetSummaryService {
    pub fn new(sources: SummarySources) -> Self {
        Self { sources }
    }
}

#[async_trait]
impl GetSummaryUseCase for GetSummaryService {
    /// Issues the seven reads concurrently; the first failure aborts the summary.
    async fn execute(&self) -> Result<PortfolioSummary, GetSummaryError> {
        let s = &self.sources;

        let (
            personal_info,
            skills,
            experiences,
            education,
            featured_projects,
            certifications,
            achievements,
        ) = futures::try_join!(
            s.personal_info.first(),
            s.skills.list(),
            s.experiences.list(),
            s.education.list(),
            s.featured_projects.list_featured(),
            s.certifications.list(),
            s.achievements.list(),
        )?;

        Ok(PortfolioSummary {
            personal_info,
            skills,
            experiences,
            education,
            featured_projects,
            certifications,
            achievements,
        })
    }
}
