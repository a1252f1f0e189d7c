//! Client error types

use shared::{FieldErrors, ServerError};
use thiserror::Error;

/// Shown when the backend could not be reached at all
pub const UNREACHABLE_MESSAGE: &str = "Could not reach the server. Please try again.";

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure (connect, timeout, TLS, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response with the parsed body
    #[error("Server returned {status}: {body}")]
    Api { status: u16, body: ServerError },

    /// Authentication required (401/403)
    #[error("Authentication required")]
    Unauthorized(ServerError),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid client configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// Build the error for a non-2xx status and its raw body.
    pub fn from_status(status: u16, body: &str) -> Self {
        let body = ServerError::from_body(body);
        match status {
            401 | 403 => Self::Unauthorized(body),
            _ => Self::Api { status, body },
        }
    }

    /// HTTP status, when the server answered
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Unauthorized(_) => Some(401),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized(_))
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Http(_))
    }

    /// Per-field messages carried by a validation body
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::Api { body, .. } | Self::Unauthorized(body) => body.field_errors(),
            _ => None,
        }
    }

    /// Operator-facing text
    pub fn user_message(&self) -> String {
        match self {
            Self::Http(_) => UNREACHABLE_MESSAGE.to_string(),
            Self::Api { status, body } if body.is_empty() => {
                format!("Request failed ({status})")
            }
            Self::Api { body, .. } => body.user_message(),
            Self::Unauthorized(body) if body.is_empty() => "Please log in again.".to_string(),
            Self::Unauthorized(body) => body.user_message(),
            Self::InvalidResponse(_) | Self::Serialization(_) => {
                "The server sent an unexpected response.".to_string()
            }
            Self::Config(msg) => msg.clone(),
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_maps_auth() {
        let err = ClientError::from_status(401, "");
        assert!(err.is_unauthorized());
        assert_eq!(err.user_message(), "Please log in again.");

        let err = ClientError::from_status(403, r#"{"message":"Forbidden"}"#);
        assert!(err.is_unauthorized());
        assert_eq!(err.user_message(), "Forbidden");
    }

    #[test]
    fn test_api_error_messages() {
        let err = ClientError::from_status(409, "既にチェックイン済みです");
        assert_eq!(err.status(), Some(409));
        assert_eq!(err.user_message(), "既にチェックイン済みです");
        assert!(err.field_errors().is_none());

        let err = ClientError::from_status(500, "");
        assert_eq!(err.user_message(), "Request failed (500)");
    }

    #[test]
    fn test_api_field_errors() {
        let err =
            ClientError::from_status(400, r#"{"errors":{"guest.phone":"must not be blank"}}"#);
        let fields = err.field_errors().unwrap();
        assert_eq!(fields["phone"], "must not be blank");
    }
}
