//! Booking Model (a stay plan offered by the property)

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::serde_helpers::{bool_true, null_default};

fn default_available() -> bool {
    true
}

/// Booking plan entity
///
/// `price` serializes as a decimal string so no precision is lost in transit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    #[serde(default, deserialize_with = "null_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_default")]
    pub price: Decimal,
    #[serde(default = "default_available", deserialize_with = "bool_true")]
    pub is_available: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

/// Create booking payload (`PUT /booking/register`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingCreate {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub is_available: bool,
}
