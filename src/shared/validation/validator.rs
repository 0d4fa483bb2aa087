use std::str::FromStr;
use std::sync::OnceLock;

use chrono::NaiveDate;
use email_address::EmailAddress;
use regex::Regex;
use serde_json::Value;
use uuid::Uuid;

use super::patch_field::json_type_name;
use super::{FieldErrors, PatchField, WriteMode};

pub const REQUIRED: &str = "This field is required.";
pub const NOT_NULL: &str = "This field may not be null.";
pub const NOT_BLANK: &str = "This field may not be blank.";
pub const INVALID_URL: &str = "Enter a valid URL.";
pub const INVALID_EMAIL: &str = "Enter a valid email address.";
pub const INVALID_INTEGER: &str = "A valid integer is required.";
pub const INVALID_BOOLEAN: &str = "Must be a valid boolean.";
pub const INVALID_STRING: &str = "Not a valid string.";
/// Key for errors that belong to a payload as a whole rather than one field.
pub const NON_FIELD_ERRORS: &str = "non_field_errors";
pub const INVALID_DATE: &str =
    "Date has wrong format. Use one of these formats instead: YYYY-MM-DD.";

const DATE_FORMAT: &str = "%Y-%m-%d";

const URL_PATTERN: &str = r"^(?i)(?:https?|ftps?)://(?:localhost|\d{1,3}(?:\.\d{1,3}){3}|(?:[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?\.)+[a-z]{2,63}\.?)(?::\d{1,5})?(?:[/?#]\S*)?$";

static URL_REGEX: OnceLock<Option<Regex>> = OnceLock::new();

fn is_valid_url(value: &str) -> bool {
    URL_REGEX
        .get_or_init(|| Regex::new(URL_PATTERN).ok())
        .as_ref()
        .is_some_and(|re| re.is_match(value))
}

//
// ──────────────────────────────────────────────────────────
// Field rules
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy)]
pub struct Text {
    required: bool,
    allow_blank: bool,
    max_len: Option<usize>,
}

impl Text {
    /// Must be present on create/replace and may not be blank.
    pub fn required() -> Self {
        Self {
            required: true,
            allow_blank: false,
            max_len: None,
        }
    }

    /// May be omitted or blank.
    pub fn optional() -> Self {
        Self {
            required: false,
            allow_blank: true,
            max_len: None,
        }
    }

    pub fn max(mut self, len: usize) -> Self {
        self.max_len = Some(len);
        self
    }

    pub fn not_blank(mut self) -> Self {
        self.allow_blank = false;
        self
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Int {
    required: bool,
    min: i64,
    max: i64,
}

impl Int {
    pub fn required() -> Self {
        Self {
            required: true,
            min: i64::from(i32::MIN),
            max: i64::from(i32::MAX),
        }
    }

    pub fn optional() -> Self {
        Self {
            required: false,
            ..Self::required()
        }
    }

    pub fn range(mut self, min: i64, max: i64) -> Self {
        self.min = min;
        self.max = max;
        self
    }
}

//
// ──────────────────────────────────────────────────────────
// Validator
// ──────────────────────────────────────────────────────────
//

/// Collects every field failure of one payload instead of stopping at the first.
///
/// Each extractor returns `None` when the field is absent or invalid; callers
/// store the result directly in their change set and call [`Validator::finish`].
pub struct Validator {
    mode: WriteMode,
    errors: FieldErrors,
}

impl Validator {
    pub fn new(mode: WriteMode) -> Self {
        Self {
            mode,
            errors: FieldErrors::new(),
        }
    }

    pub fn finish<T>(self, value: T) -> Result<T, FieldErrors> {
        if self.errors.is_empty() {
            Ok(value)
        } else {
            Err(self.errors)
        }
    }

    /// `Some(None)` is an accepted explicit null. `invalid` is reported when
    /// the value has the wrong JSON type.
    fn take<T>(
        &mut self,
        field: &str,
        value: PatchField<T>,
        required: bool,
        nullable: bool,
        invalid: &str,
    ) -> Option<Option<T>> {
        match value {
            PatchField::Unset => {
                if required && self.mode.requires_all() {
                    self.errors.add(field, REQUIRED);
                }
                None
            }
            PatchField::Null if nullable => Some(None),
            PatchField::Null => {
                self.errors.add(field, NOT_NULL);
                None
            }
            PatchField::Value(v) => Some(Some(v)),
            PatchField::Invalid(_) => {
                self.errors.add(field, invalid);
                None
            }
        }
    }

    pub fn text(&mut self, field: &str, value: PatchField<String>, rule: Text) -> Option<String> {
        let raw = self.take(field, value, rule.required, false, INVALID_STRING)??;
        let trimmed = raw.trim().to_string();

        if trimmed.is_empty() && !rule.allow_blank {
            self.errors.add(field, NOT_BLANK);
            return None;
        }

        if let Some(max) = rule.max_len {
            if trimmed.chars().count() > max {
                self.errors.add(
                    field,
                    format!("Ensure this field has no more than {max} characters."),
                );
                return None;
            }
        }

        Some(trimmed)
    }

    pub fn url(&mut self, field: &str, value: PatchField<String>, rule: Text) -> Option<String> {
        let url = self.text(field, value, rule)?;
        if !url.is_empty() && !is_valid_url(&url) {
            self.errors.add(field, INVALID_URL);
            return None;
        }
        Some(url)
    }

    pub fn email(&mut self, field: &str, value: PatchField<String>, rule: Text) -> Option<String> {
        let email = self.text(field, value, rule)?;
        if !email.is_empty() && !EmailAddress::is_valid(&email) {
            self.errors.add(field, INVALID_EMAIL);
            return None;
        }
        Some(email)
    }

    pub fn date(
        &mut self,
        field: &str,
        value: PatchField<String>,
        required: bool,
    ) -> Option<NaiveDate> {
        let raw = self.take(field, value, required, false, INVALID_STRING)??;
        self.parse_date(field, &raw)
    }

    pub fn nullable_date(
        &mut self,
        field: &str,
        value: PatchField<String>,
    ) -> Option<Option<NaiveDate>> {
        match self.take(field, value, false, true, INVALID_STRING)? {
            None => Some(None),
            Some(raw) => self.parse_date(field, &raw).map(Some),
        }
    }

    fn parse_date(&mut self, field: &str, raw: &str) -> Option<NaiveDate> {
        match NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT) {
            Ok(date) => Some(date),
            Err(_) => {
                self.errors.add(field, INVALID_DATE);
                None
            }
        }
    }

    pub fn integer(&mut self, field: &str, value: PatchField<i64>, rule: Int) -> Option<i32> {
        let value = coerce_integer(value);
        let raw = self.take(field, value, rule.required, false, INVALID_INTEGER)??;
        self.check_integer(field, raw, rule)
    }

    pub fn nullable_integer(
        &mut self,
        field: &str,
        value: PatchField<i64>,
        rule: Int,
    ) -> Option<Option<i32>> {
        let value = coerce_integer(value);
        match self.take(field, value, rule.required, true, INVALID_INTEGER)? {
            None => Some(None),
            Some(raw) => self.check_integer(field, raw, rule).map(Some),
        }
    }

    fn check_integer(&mut self, field: &str, raw: i64, rule: Int) -> Option<i32> {
        if raw < rule.min {
            self.errors.add(
                field,
                format!("Ensure this value is greater than or equal to {}.", rule.min),
            );
            return None;
        }
        if raw > rule.max {
            self.errors.add(
                field,
                format!("Ensure this value is less than or equal to {}.", rule.max),
            );
            return None;
        }
        match i32::try_from(raw) {
            Ok(v) => Some(v),
            Err(_) => {
                self.errors.add(field, INVALID_INTEGER);
                None
            }
        }
    }

    pub fn boolean(&mut self, field: &str, value: PatchField<bool>) -> Option<bool> {
        self.take(field, value, false, false, INVALID_BOOLEAN)?
    }

    pub fn choice<T: FromStr>(
        &mut self,
        field: &str,
        value: PatchField<String>,
        required: bool,
    ) -> Option<T> {
        let raw = self.take(field, value, required, false, INVALID_STRING)??;
        let trimmed = raw.trim();
        match trimmed.parse::<T>() {
            Ok(v) => Some(v),
            Err(_) => {
                self.errors
                    .add(field, format!("\"{trimmed}\" is not a valid choice."));
                None
            }
        }
    }

    /// Parses a list of ids as a set: duplicates collapse, first occurrence wins.
    pub fn id_set(&mut self, field: &str, value: PatchField<Vec<String>>) -> Option<Vec<Uuid>> {
        if let PatchField::Invalid(raw) = &value {
            self.reject_id_list(field, raw);
            return None;
        }

        let raw = self.take(field, value, false, false, INVALID_STRING)??;
        let mut ids: Vec<Uuid> = Vec::with_capacity(raw.len());
        let mut valid = true;

        for item in raw {
            match Uuid::parse_str(item.trim()) {
                Ok(id) => {
                    if !ids.contains(&id) {
                        ids.push(id);
                    }
                }
                Err(_) => {
                    valid = false;
                    self.errors
                        .add(field, format!("\"{item}\" is not a valid UUID."));
                }
            }
        }

        valid.then_some(ids)
    }

    /// Reports every offending entry of an id list that did not decode as strings.
    fn reject_id_list(&mut self, field: &str, raw: &Value) {
        let Value::Array(items) = raw else {
            self.errors.add(
                field,
                format!(
                    "Expected a list of items but got type \"{}\".",
                    json_type_name(raw)
                ),
            );
            return;
        };

        for item in items {
            match item {
                Value::String(s) if Uuid::parse_str(s.trim()).is_ok() => {}
                Value::String(s) => {
                    self.errors.add(field, format!("\"{s}\" is not a valid UUID."));
                }
                other => self.errors.add(
                    field,
                    format!(
                        "Incorrect type. Expected pk value, received {}.",
                        json_type_name(other)
                    ),
                ),
            }
        }
    }
}

/// Integers sent as numeric strings are accepted.
fn coerce_integer(value: PatchField<i64>) -> PatchField<i64> {
    match value {
        PatchField::Invalid(Value::String(s)) => match s.trim().parse::<i64>() {
            Ok(n) => PatchField::Value(n),
            Err(_) => PatchField::Invalid(Value::String(s)),
        },
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn value<T>(v: T) -> PatchField<T> {
        PatchField::Value(v)
    }

    // =====================================================
    // Presence
    // =====================================================

    #[test]
    fn test_required_missing_on_create() {
        let mut v = Validator::new(WriteMode::Create);
        assert!(v.text("name", PatchField::Unset, Text::required()).is_none());

        let errors = v.finish(()).unwrap_err();
        assert_eq!(errors.get("name").unwrap(), [REQUIRED]);
    }

    #[test]
    fn test_required_missing_on_replace() {
        let mut v = Validator::new(WriteMode::Replace);
        v.date("start_date", PatchField::Unset, true);

        let errors = v.finish(()).unwrap_err();
        assert!(errors.contains("start_date"));
    }

    #[test]
    fn test_required_missing_on_partial_is_fine() {
        let mut v = Validator::new(WriteMode::Partial);
        assert!(v.text("name", PatchField::Unset, Text::required()).is_none());
        assert!(v.finish(()).is_ok());
    }

    #[test]
    fn test_null_rejected_for_non_nullable() {
        let mut v = Validator::new(WriteMode::Partial);
        v.text("icon", PatchField::Null, Text::optional());

        let errors = v.finish(()).unwrap_err();
        assert_eq!(errors.get("icon").unwrap(), [NOT_NULL]);
    }

    #[test]
    fn test_null_accepted_for_nullable_date() {
        let mut v = Validator::new(WriteMode::Create);
        assert_eq!(v.nullable_date("end_date", PatchField::Null), Some(None));
        assert!(v.finish(()).is_ok());
    }

    // =====================================================
    // Text
    // =====================================================

    #[test]
    fn test_text_is_trimmed() {
        let mut v = Validator::new(WriteMode::Create);
        let name = v.text("name", value("  Rust  ".to_string()), Text::required());
        assert_eq!(name.as_deref(), Some("Rust"));
    }

    #[test]
    fn test_blank_required_text_rejected() {
        let mut v = Validator::new(WriteMode::Create);
        v.text("name", value("   ".to_string()), Text::required());

        let errors = v.finish(()).unwrap_err();
        assert_eq!(errors.get("name").unwrap(), [NOT_BLANK]);
    }

    #[test]
    fn test_blank_optional_text_allowed() {
        let mut v = Validator::new(WriteMode::Create);
        let icon = v.text("icon", value(String::new()), Text::optional().max(50));
        assert_eq!(icon.as_deref(), Some(""));
        assert!(v.finish(()).is_ok());
    }

    #[test]
    fn test_max_length_counts_characters() {
        let mut v = Validator::new(WriteMode::Create);
        assert!(v
            .text("cgpa", value("é".repeat(20)), Text::optional().max(20))
            .is_some());
        v.text("phone", value("1".repeat(21)), Text::optional().max(20));

        let errors = v.finish(()).unwrap_err();
        assert_eq!(
            errors.get("phone").unwrap(),
            ["Ensure this field has no more than 20 characters."]
        );
        assert!(!errors.contains("cgpa"));
    }

    // =====================================================
    // Formats
    // =====================================================

    #[test]
    fn test_url_validation() {
        let mut v = Validator::new(WriteMode::Create);
        assert!(v
            .url("github_url", value("https://github.com/me".into()), Text::optional())
            .is_some());
        assert!(v
            .url("live_url", value(String::new()), Text::optional())
            .is_some());
        assert!(v
            .url("image_url", value("not a url".into()), Text::optional())
            .is_none());

        let errors = v.finish(()).unwrap_err();
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["image_url"]);
        assert_eq!(errors.get("image_url").unwrap(), [INVALID_URL]);
    }

    #[test]
    fn test_email_validation() {
        let mut v = Validator::new(WriteMode::Create);
        assert!(v
            .email("email", value("me@example.com".into()), Text::optional().not_blank())
            .is_some());
        v.email("email", value("nope".into()), Text::optional().not_blank());

        let errors = v.finish(()).unwrap_err();
        assert_eq!(errors.get("email").unwrap(), [INVALID_EMAIL]);
    }

    #[test]
    fn test_date_format() {
        let mut v = Validator::new(WriteMode::Create);
        assert_eq!(
            v.date("date", value("2024-02-29".into()), true),
            NaiveDate::from_ymd_opt(2024, 2, 29)
        );
        v.date("issue_date", value("29/02/2024".into()), true);

        let errors = v.finish(()).unwrap_err();
        assert_eq!(errors.get("issue_date").unwrap(), [INVALID_DATE]);
    }

    // =====================================================
    // Numbers and choices
    // =====================================================

    #[test]
    fn test_integer_range() {
        let mut v = Validator::new(WriteMode::Create);
        assert_eq!(
            v.integer("proficiency", value(100), Int::optional().range(0, 100)),
            Some(100)
        );
        v.integer("proficiency", value(101), Int::optional().range(0, 100));

        let errors = v.finish(()).unwrap_err();
        assert_eq!(
            errors.get("proficiency").unwrap(),
            ["Ensure this value is less than or equal to 100."]
        );
    }

    #[test]
    fn test_integer_outside_column_range() {
        let mut v = Validator::new(WriteMode::Create);
        v.integer("start_year", value(i64::MAX), Int::required());
        assert!(v.finish(()).is_err());
    }

    #[test]
    fn test_choice_rejects_unknown_value() {
        #[derive(Debug)]
        struct Lower;
        impl FromStr for Lower {
            type Err = ();
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                if s == "ok" {
                    Ok(Lower)
                } else {
                    Err(())
                }
            }
        }

        let mut v = Validator::new(WriteMode::Create);
        assert!(v.choice::<Lower>("category", value("ok".into()), true).is_some());
        v.choice::<Lower>("category", value("not-a-real-category".into()), true);

        let errors = v.finish(()).unwrap_err();
        assert_eq!(
            errors.get("category").unwrap(),
            ["\"not-a-real-category\" is not a valid choice."]
        );
    }

    #[test]
    fn test_id_set_deduplicates() {
        let id = Uuid::new_v4();
        let other = Uuid::new_v4();
        let mut v = Validator::new(WriteMode::Create);

        let ids = v.id_set(
            "technology_ids",
            value(vec![id.to_string(), other.to_string(), id.to_string()]),
        );

        assert_eq!(ids, Some(vec![id, other]));
        assert!(v.finish(()).is_ok());
    }

    // =====================================================
    // Wrong JSON types
    // =====================================================

    #[test]
    fn test_wrong_types_are_reported_per_field() {
        let mut v = Validator::new(WriteMode::Create);
        v.integer("proficiency", PatchField::Invalid(json!("high")), Int::optional());
        v.boolean("featured", PatchField::Invalid(json!("yes")));
        v.text("name", PatchField::Invalid(json!(42)), Text::required());
        v.date("start_date", PatchField::Invalid(json!(20240101)), true);

        let errors = v.finish(()).unwrap_err();
        assert_eq!(errors.get("proficiency").unwrap(), [INVALID_INTEGER]);
        assert_eq!(errors.get("featured").unwrap(), [INVALID_BOOLEAN]);
        assert_eq!(errors.get("name").unwrap(), [INVALID_STRING]);
        assert_eq!(errors.get("start_date").unwrap(), [INVALID_STRING]);
    }

    #[test]
    fn test_numeric_string_is_accepted_as_integer() {
        let mut v = Validator::new(WriteMode::Create);
        assert_eq!(
            v.integer("proficiency", PatchField::Invalid(json!(" 90 ")), Int::optional()),
            Some(90)
        );
        assert!(v.finish(()).is_ok());
    }

    #[test]
    fn test_id_set_rejects_non_list() {
        let mut v = Validator::new(WriteMode::Create);
        assert!(v
            .id_set("technology_ids", PatchField::Invalid(json!("abc")))
            .is_none());

        let errors = v.finish(()).unwrap_err();
        assert_eq!(
            errors.get("technology_ids").unwrap(),
            ["Expected a list of items but got type \"str\"."]
        );
    }

    #[test]
    fn test_id_set_rejects_non_string_entries() {
        let id = Uuid::new_v4();
        let mut v = Validator::new(WriteMode::Create);
        v.id_set(
            "technology_ids",
            PatchField::Invalid(json!([id.to_string(), 1])),
        );

        let errors = v.finish(()).unwrap_err();
        assert_eq!(
            errors.get("technology_ids").unwrap(),
            ["Incorrect type. Expected pk value, received int."]
        );
    }

    #[test]
    fn test_id_set_rejects_malformed_ids() {
        let mut v = Validator::new(WriteMode::Create);
        assert!(v
            .id_set("technology_ids", value(vec!["abc".to_string()]))
            .is_none());

        let errors = v.finish(()).unwrap_err();
        assert_eq!(
            errors.get("technology_ids").unwrap(),
            ["\"abc\" is not a valid UUID."]
        );
    }
}
