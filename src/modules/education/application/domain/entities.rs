use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::resource::application::domain::Resource;
use crate::shared::validation::{FieldErrors, Int, PatchField, Text, Validator, WriteMode};

pub const DEFAULT_FIELD_OF_STUDY: &str = "Computer Science";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Education {
    pub id: Uuid,
    pub institution: String,
    pub degree: String,
    pub field_of_study: String,
    pub start_year: i32,
    pub end_year: Option<i32>,
    pub is_current: bool,
    /// Free text, e.g. "8.9/10".
    pub cgpa: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct EducationPayload {
    #[serde(default)]
    pub institution: PatchField<String>,

    #[serde(default)]
    pub degree: PatchField<String>,

    #[serde(default)]
    pub field_of_study: PatchField<String>,

    #[serde(default)]
    pub start_year: PatchField<i64>,

    #[serde(default)]
    pub end_year: PatchField<i64>,

    #[serde(default)]
    pub is_current: PatchField<bool>,

    #[serde(default)]
    pub cgpa: PatchField<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EducationChanges {
    pub institution: Option<String>,
    pub degree: Option<String>,
    pub field_of_study: Option<String>,
    pub start_year: Option<i32>,
    pub end_year: Option<Option<i32>>,
    pub is_current: Option<bool>,
    pub cgpa: Option<String>,
}

impl Resource for Education {
    type Payload = EducationPayload;
    type Changes = EducationChanges;
    const NAME: &'static str = "education";

    fn id(&self) -> Uuid {
        self.id
    }

    fn validate(
        payload: EducationPayload,
        mode: WriteMode,
    ) -> Result<EducationChanges, FieldErrors> {
        let mut v = Validator::new(mode);
        let changes = EducationChanges {
            institution: v.text("institution", payload.institution, Text::required().max(200)),
            degree: v.text("degree", payload.degree, Text::required().max(100)),
            field_of_study: v.text(
                "field_of_study",
                payload.field_of_study,
                Text::optional().not_blank().max(100),
            ),
            start_year: v.integer("start_year", payload.start_year, Int::required()),
            end_year: v.nullable_integer("end_year", payload.end_year, Int::optional()),
            is_current: v.boolean("is_current", payload.is_current),
            cgpa: v.text("cgpa", payload.cgpa, Text::optional().max(20)),
        };
        v.finish(changes)
    }
}
