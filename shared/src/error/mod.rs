//! Server error bodies
//!
//! The backend reports failures in several shapes; this module folds them
//! into one [`ServerError`] value the front desk can show verbatim or map
//! onto form fields.
//!
//! | Body                                              | Variant                  |
//! |---------------------------------------------------|--------------------------|
//! | `{"message": "..."}`                              | [`ServerError::Message`] |
//! | `{"errors": {"guest.name": "..." \| ["..."]}}`    | [`ServerError::Fields`]  |
//! | `{"fieldErrors": [{"field": .., "message": ..}]}` | [`ServerError::Fields`]  |
//! | plain text                                        | [`ServerError::Text`]    |
//! | nothing                                           | [`ServerError::Empty`]   |
//!
//! # Example
//!
//! ```
//! use shared::error::ServerError;
//!
//! let err = ServerError::from_body(r#"{"errors": {"guest.name": "must not be blank"}}"#);
//! assert_eq!(err.field_errors().unwrap()["name"], "must not be blank");
//! ```

mod fields;
mod types;

pub use fields::{FieldErrors, field_key};
pub use types::ServerError;
