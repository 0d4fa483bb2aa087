use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::resource::application::domain::Resource;
use crate::modules::technology::application::domain::entities::Technology;
use crate::shared::validation::{FieldErrors, PatchField, Text, Validator, WriteMode};

/// A position held, listed newest `start_date` first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Experience {
    pub id: Uuid,
    pub company: String,
    pub position: String,
    pub location: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub is_current: bool,
    pub description: String,
    pub achievements: String,
    /// Sorted by name.
    pub technologies: Vec<Technology>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ExperiencePayload {
    #[serde(default)]
    pub company: PatchField<String>,

    #[serde(default)]
    pub position: PatchField<String>,

    #[serde(default)]
    pub location: PatchField<String>,

    #[serde(default)]
    pub start_date: PatchField<String>,

    #[serde(default)]
    pub end_date: PatchField<String>,

    #[serde(default)]
    pub is_current: PatchField<bool>,

    #[serde(default)]
    pub description: PatchField<String>,

    #[serde(default)]
    pub achievements: PatchField<String>,

    /// Replaces the whole tag set when present.
    #[serde(default)]
    pub technology_ids: PatchField<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExperienceChanges {
    pub company: Option<String>,
    pub position: Option<String>,
    pub location: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<Option<NaiveDate>>,
    pub is_current: Option<bool>,
    pub description: Option<String>,
    pub achievements: Option<String>,
    pub technology_ids: Option<Vec<Uuid>>,
}

impl Resource for Experience {
    type Payload = ExperiencePayload;
    type Changes = ExperienceChanges;
    const NAME: &'static str = "experience";

    fn id(&self) -> Uuid {
        self.id
    }

    fn validate(
        payload: ExperiencePayload,
        mode: WriteMode,
    ) -> Result<ExperienceChanges, FieldErrors> {
        let mut v = Validator::new(mode);
        let changes = ExperienceChanges {
            company: v.text("company", payload.company, Text::required().max(100)),
            position: v.text("position", payload.position, Text::required().max(100)),
            location: v.text("location", payload.location, Text::optional().max(100)),
            start_date: v.date("start_date", payload.start_date, true),
            end_date: v.nullable_date("end_date", payload.end_date),
            is_current: v.boolean("is_current", payload.is_current),
            description: v.text("description", payload.description, Text::required()),
            achievements: v.text("achievements", payload.achievements, Text::optional()),
            technology_ids: v.id_set("technology_ids", payload.technology_ids),
        };
        v.finish(changes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(body: serde_json::Value) -> ExperiencePayload {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_create_collects_every_missing_field() {
        let errors = Experience::validate(parse(json!({})), WriteMode::Create).unwrap_err();

        let fields: Vec<_> = errors.fields().collect();
        assert_eq!(
            fields,
            vec!["company", "description", "position", "start_date"]
        );
    }

    #[test]
    fn test_create_with_technologies() {
        let tech = Uuid::new_v4();
        let changes = Experience::validate(
            parse(json!({
                "company": "Acme",
                "position": "Engineer",
                "start_date": "2022-03-01",
                "end_date": null,
                "description": "Built things",
                "technology_ids": [tech.to_string()],
                "technologies": [{ "name": "ignored" }]
            })),
            WriteMode::Create,
        )
        .unwrap();

        assert_eq!(changes.start_date, NaiveDate::from_ymd_opt(2022, 3, 1));
        assert_eq!(changes.end_date, Some(None));
        assert_eq!(changes.technology_ids, Some(vec![tech]));
    }

    #[test]
    fn test_partial_without_technology_ids_keeps_set() {
        let changes =
            Experience::validate(parse(json!({ "is_current": true })), WriteMode::Partial)
                .unwrap();

        assert_eq!(changes.is_current, Some(true));
        assert!(changes.technology_ids.is_none());
        assert!(changes.end_date.is_none());
    }

    #[test]
    fn test_bad_date_is_field_error() {
        let errors = Experience::validate(
            parse(json!({ "start_date": "March 2022" })),
            WriteMode::Partial,
        )
        .unwrap_err();

        assert!(errors.contains("start_date"));
    }
}
