use serde::Serialize;

use crate::modules::achievement::application::domain::entities::Achievement;
use crate::modules::certification::application::domain::entities::Certification;
use crate::modules::education::application::domain::entities::Education;
use crate::modules::experience::application::domain::entities::Experience;
use crate::modules::personal_info::application::domain::entities::PersonalInfo;
use crate::modules::project::application::domain::entities::Project;
use crate::modules::skill::application::domain::entities::Skill;

/// Everything the landing page renders, in one response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioSummary {
    /// Serialized as `null` when no profile exists yet.
    pub personal_info: Option<PersonalInfo>,
    pub skills: Vec<Skill>,
    pub experiences: Vec<Experience>,
    pub education: Vec<Education>,
    pub featured_projects: Vec<Project>,
    pub certifications: Vec<Certification>,
    pub achievements: Vec<Achievement>,
}
