use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::modules::resource::application::domain::Resource;
use crate::shared::validation::{FieldErrors, Int, PatchField, Text, Validator, WriteMode};

pub const DEFAULT_PROFICIENCY: i32 = 80;

//
// ──────────────────────────────────────────────────────────
// Category
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Languages,
    Frameworks,
    Aiml,
    Databases,
    Devops,
    Cloud,
    Concepts,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 7] = [
        SkillCategory::Languages,
        SkillCategory::Frameworks,
        SkillCategory::Aiml,
        SkillCategory::Databases,
        SkillCategory::Devops,
        SkillCategory::Cloud,
        SkillCategory::Concepts,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SkillCategory::Languages => "languages",
            SkillCategory::Frameworks => "frameworks",
            SkillCategory::Aiml => "aiml",
            SkillCategory::Databases => "databases",
            SkillCategory::Devops => "devops",
            SkillCategory::Cloud => "cloud",
            SkillCategory::Concepts => "concepts",
        }
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Unknown skill category: {0}")]
pub struct UnknownSkillCategory(pub String);

impl FromStr for SkillCategory {
    type Err = UnknownSkillCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SkillCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownSkillCategory(s.to_string()))
    }
}

//
// ──────────────────────────────────────────────────────────
// Skill
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Skill {
    pub id: Uuid,
    pub name: String,
    pub category: SkillCategory,
    pub proficiency: i32,
    pub icon: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct SkillPayload {
    #[serde(default)]
    pub name: PatchField<String>,

    #[serde(default)]
    pub category: PatchField<String>,

    #[serde(default)]
    pub proficiency: PatchField<i64>,

    #[serde(default)]
    pub icon: PatchField<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkillChanges {
    pub name: Option<String>,
    pub category: Option<SkillCategory>,
    pub proficiency: Option<i32>,
    pub icon: Option<String>,
}

impl Resource for Skill {
    type Payload = SkillPayload;
    type Changes = SkillChanges;
    const NAME: &'static str = "skill";

    fn id(&self) -> Uuid {
        self.id
    }

    fn validate(payload: SkillPayload, mode: WriteMode) -> Result<SkillChanges, FieldErrors> {
        let mut v = Validator::new(mode);
        let changes = SkillChanges {
            name: v.text("name", payload.name, Text::required().max(100)),
            category: v.choice("category", payload.category, true),
            proficiency: v.integer(
                "proficiency",
                payload.proficiency,
                Int::optional().range(0, 100),
            ),
            icon: v.text("icon", payload.icon, Text::optional().max(50)),
        };
        v.finish(changes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(body: serde_json::Value) -> SkillPayload {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_category_round_trips_through_str() {
        for category in SkillCategory::ALL {
            assert_eq!(category.as_str().parse::<SkillCategory>(), Ok(category));
        }
        assert!("Languages".parse::<SkillCategory>().is_err());
    }

    #[test]
    fn test_category_serializes_lowercase() {
        let value = serde_json::to_value(SkillCategory::Aiml).unwrap();
        assert_eq!(value, json!("aiml"));
    }

    #[test]
    fn test_valid_skill() {
        let changes = Skill::validate(
            parse(json!({ "name": "Go", "category": "languages", "proficiency": 90 })),
            WriteMode::Create,
        )
        .unwrap();

        assert_eq!(changes.name.as_deref(), Some("Go"));
        assert_eq!(changes.category, Some(SkillCategory::Languages));
        assert_eq!(changes.proficiency, Some(90));
        assert!(changes.icon.is_none());
    }

    #[test]
    fn test_unknown_category() {
        let errors = Skill::validate(
            parse(json!({ "name": "X", "category": "not-a-real-category" })),
            WriteMode::Create,
        )
        .unwrap_err();

        assert_eq!(
            errors.get("category").unwrap(),
            ["\"not-a-real-category\" is not a valid choice."]
        );
        assert!(!errors.contains("name"));
    }

    #[test]
    fn test_proficiency_out_of_range() {
        let errors = Skill::validate(
            parse(json!({ "proficiency": 101 })),
            WriteMode::Partial,
        )
        .unwrap_err();

        assert_eq!(
            errors.get("proficiency").unwrap(),
            ["Ensure this value is less than or equal to 100."]
        );
    }
}
