use serde::de::{DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::Value;

//
// ──────────────────────────────────────────────────────────
// PatchField (explicit write semantics)
// ──────────────────────────────────────────────────────────
// Meaning:
// - Unset: field not provided => keep stored value (or default on create)
// - Null: explicitly null => clear the column (only for nullable fields)
// - Value(v): replace with v
// - Invalid(raw): present but of the wrong JSON type; reported by the validator
//
// Serde behavior:
// - omitted field => Unset (because of #[serde(default)])
// - null => Null
// - value of type T => Value(value)
// - anything else => Invalid(raw)
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchField<T> {
    Unset,
    Null,
    Value(T),
    Invalid(Value),
}

impl<T> Default for PatchField<T> {
    fn default() -> Self {
        PatchField::Unset
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for PatchField<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Value::deserialize(deserializer)?;
        if raw.is_null() {
            return Ok(PatchField::Null);
        }

        Ok(match T::deserialize(&raw) {
            Ok(value) => PatchField::Value(value),
            Err(_) => PatchField::Invalid(raw),
        })
    }
}

impl<T> From<T> for PatchField<T> {
    fn from(value: T) -> Self {
        PatchField::Value(value)
    }
}

/// Python-style name of a JSON value's type, as used in error messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "NoneType",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "int",
        Value::String(_) => "str",
        Value::Array(_) => "list",
        Value::Object(_) => "dict",
    }
}
