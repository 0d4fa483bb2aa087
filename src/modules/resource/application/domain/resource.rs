use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use crate::shared::validation::{FieldErrors, WriteMode};

/// A portfolio record type exposed as a CRUD collection.
///
/// `Self` is the transfer shape returned to clients. `Payload` is the raw
/// write body; `Changes` is the validated, trimmed change set a repository
/// applies (every field optional so one type serves create, replace and patch).
pub trait Resource: Serialize + Clone + Send + Sync + 'static {
    type Payload: DeserializeOwned + Send + 'static;
    type Changes: Send + Sync + 'static;

    /// Singular name used in log lines.
    const NAME: &'static str;

    fn id(&self) -> Uuid;

    fn validate(payload: Self::Payload, mode: WriteMode) -> Result<Self::Changes, FieldErrors>;
}
