use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::resource::application::domain::Resource;
use crate::shared::validation::{FieldErrors, PatchField, Text, Validator, WriteMode};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Achievement {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
}

#[derive(Debug, Default, Deserialize)]
pub struct AchievementPayload {
    #[serde(default)]
    pub title: PatchField<String>,

    #[serde(default)]
    pub description: PatchField<String>,

    #[serde(default)]
    pub date: PatchField<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AchievementChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
}

impl Resource for Achievement {
    type Payload = AchievementPayload;
    type Changes = AchievementChanges;
    const NAME: &'static str = "achievement";

    fn id(&self) -> Uuid {
        self.id
    }

    fn validate(
        payload: AchievementPayload,
        mode: WriteMode,
    ) -> Result<AchievementChanges, FieldErrors> {
        let mut v = Validator::new(mode);
        let changes = AchievementChanges {
            title: v.text("title", payload.title, Text::required().max(200)),
            description: v.text("description", payload.description, Text::required()),
            date: v.date("date", payload.date, true),
        };
        v.finish(changes)
    }
}
