//! Parsed server error body

use std::fmt;

use serde_json::Value;

use super::fields::{FieldErrors, field_key};

const FIELD_FALLBACK: &str = "Please check this field";

/// Error body returned by the backend with a non-2xx status
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerError {
    /// `{"message": "..."}` (also Spring's default `{"error": ..}` body)
    Message(String),
    /// Validation failure with per-field messages
    Fields {
        message: Option<String>,
        fields: FieldErrors,
    },
    /// Non-JSON body
    Text(String),
    /// Empty body
    Empty,
}

impl ServerError {
    /// Parse a raw response body.
    pub fn from_body(body: &str) -> Self {
        let trimmed = body.trim();
        if trimmed.is_empty() {
            return Self::Empty;
        }
        match serde_json::from_str::<Value>(trimmed) {
            Ok(value) => Self::from_json(&value).unwrap_or_else(|| Self::Text(trimmed.to_string())),
            Err(_) => Self::Text(trimmed.to_string()),
        }
    }

    /// Interpret a JSON body; `None` when it has no recognizable shape.
    pub fn from_json(value: &Value) -> Option<Self> {
        if let Value::String(text) = value {
            return Some(Self::Text(text.clone()));
        }
        let obj = value.as_object()?;
        let message = obj
            .get("message")
            .and_then(Value::as_str)
            .filter(|m| !m.trim().is_empty())
            .map(str::to_string);

        if let Some(Value::Object(errors)) = obj.get("errors") {
            let fields = errors
                .iter()
                .map(|(path, v)| (field_key(path), join_messages(v)))
                .collect::<FieldErrors>();
            if !fields.is_empty() {
                return Some(Self::Fields { message, fields });
            }
        }

        if let Some(Value::Array(items)) = obj.get("fieldErrors") {
            let fields = items
                .iter()
                .filter_map(|item| {
                    let path = item.get("field")?.as_str()?;
                    if path.is_empty() {
                        return None;
                    }
                    let text = item
                        .get("message")
                        .or_else(|| item.get("defaultMessage"))
                        .and_then(Value::as_str)
                        .unwrap_or(FIELD_FALLBACK);
                    Some((field_key(path), text.to_string()))
                })
                .collect::<FieldErrors>();
            if !fields.is_empty() {
                return Some(Self::Fields { message, fields });
            }
        }

        if let Some(message) = message {
            return Some(Self::Message(message));
        }
        obj.get("error")
            .and_then(Value::as_str)
            .map(|e| Self::Message(e.to_string()))
    }

    /// Per-field messages, when the body carried any.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::Fields { fields, .. } => Some(fields),
            _ => None,
        }
    }

    /// Text suitable for showing to the operator as-is.
    pub fn user_message(&self) -> String {
        match self {
            Self::Message(m) | Self::Text(m) => m.clone(),
            Self::Fields {
                message: Some(m), ..
            } => m.clone(),
            Self::Fields {
                message: None,
                fields,
            } => fields
                .iter()
                .map(|(k, v)| format!("{k}: {v}"))
                .collect::<Vec<_>>()
                .join(" / "),
            Self::Empty => String::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.user_message())
    }
}

fn join_messages(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|v| v.as_str().map(str::to_string).unwrap_or_else(|| v.to_string()))
            .collect::<Vec<_>>()
            .join(" / "),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_body() {
        let err = ServerError::from_body(r#"{"message":"Reservation not found"}"#);
        assert_eq!(err, ServerError::Message("Reservation not found".into()));
        assert_eq!(err.user_message(), "Reservation not found");
        assert!(err.field_errors().is_none());
    }

    #[test]
    fn test_error_map_body() {
        let err = ServerError::from_body(
            r#"{"errors":{"guest.name":"must not be blank","stayDays":["too small","must be a number"]}}"#,
        );
        let fields = err.field_errors().unwrap();
        assert_eq!(fields["name"], "must not be blank");
        assert_eq!(fields["stayDays"], "too small / must be a number");
        assert_eq!(
            err.user_message(),
            "name: must not be blank / stayDays: too small / must be a number"
        );
    }

    #[test]
    fn test_field_error_array_body() {
        let err = ServerError::from_body(
            r#"{"message":"Validation failed","fieldErrors":[
                {"field":"guest.email","defaultMessage":"invalid email"},
                {"field":"phone"},
                {"field":"","message":"ignored"}
            ]}"#,
        );
        let fields = err.field_errors().unwrap();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields["email"], "invalid email");
        assert_eq!(fields["phone"], FIELD_FALLBACK);
        assert_eq!(err.user_message(), "Validation failed");
    }

    #[test]
    fn test_spring_default_body() {
        let err = ServerError::from_body(
            r#"{"timestamp":"2025-08-01T10:00:00","status":500,"error":"Internal Server Error","message":"","path":"/guest/update"}"#,
        );
        assert_eq!(err, ServerError::Message("Internal Server Error".into()));
    }

    #[test]
    fn test_text_and_empty_bodies() {
        assert_eq!(
            ServerError::from_body("チェックインできません"),
            ServerError::Text("チェックインできません".into())
        );
        assert_eq!(ServerError::from_body(r#""quoted""#), ServerError::Text("quoted".into()));
        assert_eq!(ServerError::from_body("[1,2]"), ServerError::Text("[1,2]".into()));
        assert!(ServerError::from_body("  ").is_empty());
    }
}
