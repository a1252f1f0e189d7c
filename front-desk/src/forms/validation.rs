//! Form input validation
//!
//! Forms hold raw text the way the operator typed it. A [`Validator`]
//! parses each field, collecting one message per failing field, and
//! [`Validator::finish`] turns the collection into a `Validation` error.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use shared::FieldErrors;
use uuid::Uuid;

use crate::{DeskError, DeskResult};

// ── Text length limits ──────────────────────────────────────────────

/// Names and plan names
pub const MAX_NAME_LEN: usize = 100;

/// Memo and description text
pub const MAX_NOTE_LEN: usize = 500;

/// Phone, region and other short fields
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// True for the canonical 8-4-4-4-12 hex form.
pub fn is_uuid(value: &str) -> bool {
    let value = value.trim();
    value.len() == 36 && Uuid::parse_str(value).is_ok()
}

#[derive(Debug, Default)]
pub struct Validator {
    errors: FieldErrors,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure; the first message for a field wins.
    pub fn fail(&mut self, field: &str, message: impl Into<String>) {
        self.errors
            .entry(field.to_string())
            .or_insert_with(|| message.into());
    }

    pub fn has_error(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    /// Non-blank text within `max_len` characters, trimmed.
    pub fn required(&mut self, field: &str, label: &str, value: &str, max_len: usize) -> String {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            self.fail(field, format!("{label} is required"));
        } else {
            self.max_len(field, label, trimmed, max_len);
        }
        trimmed.to_string()
    }

    /// Optional text within `max_len` characters, trimmed.
    pub fn optional(&mut self, field: &str, label: &str, value: &str, max_len: usize) -> String {
        let trimmed = value.trim();
        self.max_len(field, label, trimmed, max_len);
        trimmed.to_string()
    }

    fn max_len(&mut self, field: &str, label: &str, value: &str, max_len: usize) {
        let len = value.chars().count();
        if len > max_len {
            self.fail(
                field,
                format!("{label} is too long ({len} chars, max {max_len})"),
            );
        }
    }

    /// UUID-shaped identifier.
    pub fn uuid(&mut self, field: &str, label: &str, value: &str) -> String {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            self.fail(field, format!("{label} is required"));
        } else if !is_uuid(trimmed) {
            self.fail(field, format!("{label} must be a valid ID"));
        }
        trimmed.to_string()
    }

    /// Non-negative decimal amount; `None` when blank or invalid.
    pub fn decimal(
        &mut self,
        field: &str,
        label: &str,
        value: &str,
        required: bool,
    ) -> Option<Decimal> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            if required {
                self.fail(field, format!("{label} is required"));
            }
            return None;
        }
        match trimmed.replace(',', "").parse::<Decimal>() {
            Ok(amount) if amount.is_sign_negative() => {
                self.fail(field, format!("{label} must not be negative"));
                None
            }
            Ok(amount) => Some(amount),
            Err(_) => {
                self.fail(field, format!("{label} must be a number"));
                None
            }
        }
    }

    /// Non-negative whole number; `None` when blank or invalid.
    pub fn whole_number(
        &mut self,
        field: &str,
        label: &str,
        value: &str,
        required: bool,
    ) -> Option<u32> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            if required {
                self.fail(field, format!("{label} is required"));
            }
            return None;
        }
        match trimmed.parse::<i64>() {
            Ok(n) if n < 0 => {
                self.fail(field, format!("{label} must be 0 or more"));
                None
            }
            Ok(n) => match u32::try_from(n) {
                Ok(n) => Some(n),
                Err(_) => {
                    self.fail(field, format!("{label} is too large"));
                    None
                }
            },
            Err(_) => {
                self.fail(field, format!("{label} must be a whole number"));
                None
            }
        }
    }

    /// Stay length, at least one night.
    pub fn stay_days(&mut self, field: &str, value: &str) -> u32 {
        match self.whole_number(field, "Stay days", value, true) {
            Some(0) => {
                self.fail(field, "Stay days must be 1 or more");
                1
            }
            Some(n) => n,
            None => 1,
        }
    }

    /// `YYYY-MM-DD` date; `None` when blank or invalid.
    pub fn date(
        &mut self,
        field: &str,
        label: &str,
        value: &str,
        required: bool,
    ) -> Option<NaiveDate> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            if required {
                self.fail(field, format!("{label} is required"));
            }
            return None;
        }
        match NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
            Ok(date) => Some(date),
            Err(_) => {
                self.fail(field, format!("{label} must be a date (YYYY-MM-DD)"));
                None
            }
        }
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn finish(self) -> DeskResult<()> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(DeskError::Validation(self.errors))
        }
    }
}
