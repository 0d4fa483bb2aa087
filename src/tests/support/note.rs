//! A two-field resource for exercising the generic machinery in isolation.
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::resource::application::domain::Resource;
use crate::shared::validation::{FieldErrors, PatchField, Text, Validator, WriteMode};
use crate::tests::support::in_memory::Materialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Note {
    pub id: Uuid,
    pub title: String,
    pub pinned: bool,
}

impl Note {
    pub fn new(title: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.to_string(),
            pinned: false,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct NotePayload {
    #[serde(default)]
    pub title: PatchField<String>,

    #[serde(default)]
    pub pinned: PatchField<bool>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NoteChanges {
    pub title: Option<String>,
    pub pinned: Option<bool>,
}

impl Resource for Note {
    type Payload = NotePayload;
    type Changes = NoteChanges;
    const NAME: &'static str = "note";

    fn id(&self) -> Uuid {
        self.id
    }

    fn validate(payload: NotePayload, mode: WriteMode) -> Result<NoteChanges, FieldErrors> {
        let mut v = Validator::new(mode);
        let changes = NoteChanges {
            title: v.text("title", payload.title, Text::required().max(10)),
            pinned: v.boolean("pinned", payload.pinned),
        };
        v.finish(changes)
    }
}

impl Materialize for Note {
    fn materialize(id: Uuid, changes: NoteChanges, existing: Option<&Note>) -> Note {
        Note {
            id,
            title: changes
                .title
                .or_else(|| existing.map(|n| n.title.clone()))
                .unwrap_or_default(),
            pinned: changes
                .pinned
                .or_else(|| existing.map(|n| n.pinned))
                .unwrap_or(false),
        }
    }
}
