//! Guest registration (guest + first reservation in one request)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Guest;

/// `PUT /guest/register` payload
///
/// An existing guest keeps its `id`; a new guest is sent without one and
/// the backend assigns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestRegistration {
    pub guest: Guest,
    pub booking_id: String,
    pub stay_days: u32,
    pub check_in_date: NaiveDate,
    #[serde(default)]
    pub memo: String,
}
