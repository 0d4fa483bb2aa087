//! Ready-made domain records for tests.
use chrono::NaiveDate;
use uuid::Uuid;

use crate::modules::personal_info::application::domain::entities::{
    PersonalInfo, DEFAULT_EMAIL, DEFAULT_LOCATION,
};
use crate::modules::project::application::domain::entities::Project;
use crate::modules::skill::application::domain::entities::{
    Skill, SkillCategory, SkillChanges, DEFAULT_PROFICIENCY,
};
use crate::tests::support::in_memory::Materialize;

pub fn personal_info(name: &str) -> PersonalInfo {
    PersonalInfo {
        id: Uuid::new_v4(),
        name: name.to_string(),
        title: "Backend Engineer".to_string(),
        summary: "Builds APIs".to_string(),
        linkedin_url: String::new(),
        github_url: String::new(),
        email: DEFAULT_EMAIL.to_string(),
        phone: String::new(),
        location: DEFAULT_LOCATION.to_string(),
        leetcode_problems: 0,
        leetcode_rating: 0,
        years_experience: 0,
    }
}

pub fn project(title: &str, featured: bool) -> Project {
    Project {
        id: Uuid::new_v4(),
        title: title.to_string(),
        description: "A project".to_string(),
        tech_stack: String::new(),
        technologies: vec![],
        github_url: String::new(),
        live_url: String::new(),
        image_url: String::new(),
        featured,
        created_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        achievements: String::new(),
    }
}

pub fn skill(name: &str, category: SkillCategory) -> Skill {
    Skill {
        id: Uuid::new_v4(),
        name: name.to_string(),
        category,
        proficiency: DEFAULT_PROFICIENCY,
        icon: String::new(),
    }
}

impl Materialize for Skill {
    fn materialize(id: Uuid, changes: SkillChanges, existing: Option<&Skill>) -> Skill {
        Skill {
            id,
            name: changes
                .name
                .or_else(|| existing.map(|s| s.name.clone()))
                .unwrap_or_default(),
            category: changes
                .category
                .or_else(|| existing.map(|s| s.category))
                .unwrap_or(SkillCategory::Concepts),
            proficiency: changes
                .proficiency
                .or_else(|| existing.map(|s| s.proficiency))
                .unwrap_or(DEFAULT_PROFICIENCY),
            icon: changes
                .icon
                .or_else(|| existing.map(|s| s.icon.clone()))
                .unwrap_or_default(),
        }
    }
}
