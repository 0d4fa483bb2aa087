use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::resource::application::domain::Resource;
use crate::modules::technology::application::domain::entities::Technology;
use crate::shared::validation::{FieldErrors, PatchField, Text, Validator, WriteMode};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    /// Free-form stack summary, independent of `technologies`.
    pub tech_stack: String,
    pub technologies: Vec<Technology>,
    pub github_url: String,
    pub live_url: String,
    pub image_url: String,
    pub featured: bool,
    pub created_date: NaiveDate,
    pub achievements: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct ProjectPayload {
    #[serde(default)]
    pub title: PatchField<String>,

    #[serde(default)]
    pub description: PatchField<String>,

    #[serde(default)]
    pub tech_stack: PatchField<String>,

    #[serde(default)]
    pub github_url: PatchField<String>,

    #[serde(default)]
    pub live_url: PatchField<String>,

    #[serde(default)]
    pub image_url: PatchField<String>,

    #[serde(default)]
    pub featured: PatchField<bool>,

    #[serde(default)]
    pub created_date: PatchField<String>,

    #[serde(default)]
    pub achievements: PatchField<String>,

    #[serde(default)]
    pub technology_ids: PatchField<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub tech_stack: Option<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub image_url: Option<String>,
    pub featured: Option<bool>,
    pub created_date: Option<NaiveDate>,
    pub achievements: Option<String>,
    pub technology_ids: Option<Vec<Uuid>>,
}

impl Resource for Project {
    type Payload = ProjectPayload;
    type Changes = ProjectChanges;
    const NAME: &'static str = "project";

    fn id(&self) -> Uuid {
        self.id
    }

    fn validate(payload: ProjectPayload, mode: WriteMode) -> Result<ProjectChanges, FieldErrors> {
        let url = Text::optional().max(200);

        let mut v = Validator::new(mode);
        let changes = ProjectChanges {
            title: v.text("title", payload.title, Text::required().max(200)),
            description: v.text("description", payload.description, Text::required()),
            tech_stack: v.text("tech_stack", payload.tech_stack, Text::optional().max(500)),
            github_url: v.url("github_url", payload.github_url, url),
            live_url: v.url("live_url", payload.live_url, url),
            image_url: v.url("image_url", payload.image_url, url),
            featured: v.boolean("featured", payload.featured),
            created_date: v.date("created_date", payload.created_date, true),
            achievements: v.text("achievements", payload.achievements, Text::optional()),
            technology_ids: v.id_set("technology_ids", payload.technology_ids),
        };
        v.finish(changes)
    }
}
