//! Per-field error messages

use std::collections::BTreeMap;

/// Field name → message, ordered by field name
pub type FieldErrors = BTreeMap<String, String>;

/// Form-level key of a backend field path (`guest.name` → `name`).
pub fn field_key(path: &str) -> String {
    path.strip_prefix("guest.").unwrap_or(path).to_string()
}
