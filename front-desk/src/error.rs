//! Front-desk error types

use desk_client::ClientError;
use shared::FieldErrors;
use shared::models::ReservationStatus;
use thiserror::Error;

/// Shown next to a form that failed local validation
pub const CHECK_FIELDS_MESSAGE: &str = "Please check the highlighted fields.";

#[derive(Debug, Error)]
pub enum DeskError {
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Local validation failed; no request was sent
    #[error("Validation failed: {}", join_fields(.0))]
    Validation(FieldErrors),

    #[error("A save is already in progress")]
    SubmitInFlight,

    #[error("The form is not open")]
    ModalClosed,

    #[error("Cannot {action} a reservation that is {status}")]
    TransitionNotAllowed {
        action: &'static str,
        status: ReservationStatus,
    },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DeskError {
    /// Single field failure
    pub fn field(field: &str, message: impl Into<String>) -> Self {
        let mut fields = FieldErrors::new();
        fields.insert(field.to_string(), message.into());
        Self::Validation(fields)
    }

    /// Per-field messages from local validation or the server body
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::Validation(fields) => Some(fields),
            Self::Client(e) => e.field_errors(),
            _ => None,
        }
    }

    /// Operator-facing text
    pub fn user_message(&self) -> String {
        match self {
            Self::Client(e) => e.user_message(),
            Self::Validation(_) => CHECK_FIELDS_MESSAGE.to_string(),
            Self::TransitionNotAllowed { action, status } => {
                format!("Cannot {action}: the reservation is {}.", status.label())
            }
            other => other.to_string(),
        }
    }
}

fn join_fields(fields: &FieldErrors) -> String {
    fields
        .iter()
        .map(|(k, v)| format!("{k}: {v}"))
        .collect::<Vec<_>>()
        .join(" / ")
}

pub type DeskResult<T> = Result<T, DeskError>;
