use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::resource::application::domain::Resource;
use crate::shared::validation::{FieldErrors, PatchField, Text, Validator, WriteMode};

/// Shared tag vocabulary attached to experiences and projects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Technology {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct TechnologyPayload {
    #[serde(default)]
    pub name: PatchField<String>,

    #[serde(default)]
    pub description: PatchField<String>,

    #[serde(default)]
    pub icon: PatchField<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TechnologyChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
}

impl Resource for Technology {
    type Payload = TechnologyPayload;
    type Changes = TechnologyChanges;
    const NAME: &'static str = "technology";

    fn id(&self) -> Uuid {
        self.id
    }

    fn validate(
        payload: TechnologyPayload,
        mode: WriteMode,
    ) -> Result<TechnologyChanges, FieldErrors> {
        let mut v = Validator::new(mode);
        let changes = TechnologyChanges {
            name: v.text("name", payload.name, Text::required().max(100)),
            description: v.text("description", payload.description, Text::optional()),
            icon: v.text("icon", payload.icon, Text::optional().max(50)),
        };
        v.finish(changes)
    }
}
