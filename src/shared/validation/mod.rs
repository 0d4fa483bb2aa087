pub mod field_errors;
pub mod patch_field;
pub mod validator;

pub use field_errors::FieldErrors;
pub use patch_field::{json_type_name, PatchField};
pub use validator::{Int, Text, Validator};

/// How a write payload is checked against the stored record.
///
/// - `Create`: required fields must be present, omitted optional fields take defaults
/// - `Replace`: required fields must be present, omitted optional fields keep stored values
/// - `Partial`: any subset, omitted fields keep stored values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    Create,
    Replace,
    Partial,
}

impl WriteMode {
    pub fn requires_all(self) -> bool {
        !matches!(self, WriteMode::Partial)
    }
}
