use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::resource::application::domain::Resource;
use crate::shared::validation::{FieldErrors, Int, PatchField, Text, Validator, WriteMode};

pub const DEFAULT_EMAIL: &str = "example@example.com";
pub const DEFAULT_LOCATION: &str = "India";

/// The site owner's profile. Expected to exist once, but not enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonalInfo {
    pub id: Uuid,
    pub name: String,
    pub title: String,
    pub summary: String,
    pub linkedin_url: String,
    pub github_url: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub leetcode_problems: i32,
    pub leetcode_rating: i32,
    pub years_experience: i32,
}

#[derive(Debug, Default, Deserialize)]
pub struct PersonalInfoPayload {
    #[serde(default)]
    pub name: PatchField<String>,

    #[serde(default)]
    pub title: PatchField<String>,

    #[serde(default)]
    pub summary: PatchField<String>,

    #[serde(default)]
    pub linkedin_url: PatchField<String>,

    #[serde(default)]
    pub github_url: PatchField<String>,

    #[serde(default)]
    pub email: PatchField<String>,

    #[serde(default)]
    pub phone: PatchField<String>,

    #[serde(default)]
    pub location: PatchField<String>,

    #[serde(default)]
    pub leetcode_problems: PatchField<i64>,

    #[serde(default)]
    pub leetcode_rating: PatchField<i64>,

    #[serde(default)]
    pub years_experience: PatchField<i64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersonalInfoChanges {
    pub name: Option<String>,
    pub title: Option<String>,
    pub summary: Option<String>,
    pub linkedin_url: Option<String>,
    pub github_url: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub leetcode_problems: Option<i32>,
    pub leetcode_rating: Option<i32>,
    pub years_experience: Option<i32>,
}

impl Resource for PersonalInfo {
    type Payload = PersonalInfoPayload;
    type Changes = PersonalInfoChanges;
    const NAME: &'static str = "personal info";

    fn id(&self) -> Uuid {
        self.id
    }

    fn validate(
        payload: PersonalInfoPayload,
        mode: WriteMode,
    ) -> Result<PersonalInfoChanges, FieldErrors> {
        let url = Text::optional().max(200);

        let mut v = Validator::new(mode);
        let changes = PersonalInfoChanges {
            name: v.text("name", payload.name, Text::required().max(100)),
            title: v.text("title", payload.title, Text::required().max(200)),
            summary: v.text("summary", payload.summary, Text::required()),
            linkedin_url: v.url("linkedin_url", payload.linkedin_url, url),
            github_url: v.url("github_url", payload.github_url, url),
            email: v.email("email", payload.email, Text::optional().not_blank().max(254)),
            phone: v.text("phone", payload.phone, Text::optional().max(20)),
            location: v.text(
                "location",
                payload.location,
                Text::optional().not_blank().max(100),
            ),
            leetcode_problems: v.integer(
                "leetcode_problems",
                payload.leetcode_problems,
                Int::optional(),
            ),
            leetcode_rating: v.integer("leetcode_rating", payload.leetcode_rating, Int::optional()),
            years_experience: v.integer(
                "years_experience",
                payload.years_experience,
                Int::optional(),
            ),
        };
        v.finish(changes)
    }
}
