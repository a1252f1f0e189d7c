//! Shared types for the front-desk workspace
//!
//! Wire models of the hotel backend, server error bodies, kana
//! normalization and the list query/page types used by every view.

pub mod error;
pub mod kana;
pub mod models;
pub mod query;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{FieldErrors, ServerError};
pub use query::{GuestSearchCriteria, GuestSearchRequest, PAGE_SIZE, PageSlice, StatusFilter};
