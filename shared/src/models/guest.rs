//! Guest Model

use serde::{Deserialize, Serialize};

use super::serde_helpers::{null_default, valid_rows};
use super::{Booking, Reservation};

/// Plan name shown when a reservation's booking is not in the lookup set
pub const UNKNOWN_PLAN: &str = "Unknown plan";

/// Guest entity
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guest {
    /// Empty for a guest that has not been registered yet
    #[serde(
        default,
        deserialize_with = "null_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub id: String,
    #[serde(default, deserialize_with = "null_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_default")]
    pub kana_name: String,
    #[serde(default, deserialize_with = "null_default")]
    pub gender: String,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default, deserialize_with = "null_default")]
    pub region: String,
    #[serde(default, deserialize_with = "null_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_default")]
    pub phone: String,
    /// Soft-delete flag, toggled by `PUT /guest/deleted`
    #[serde(default, deserialize_with = "null_default")]
    pub deleted: bool,
}

/// Guest with reservations and the bookings they reference
///
/// `bookings` is a lookup set keyed by booking id; it is not aligned with
/// `reservations` by position. A reservation or booking row that does not
/// decode (no check-in date, unknown status, ...) is dropped on its own
/// instead of failing the whole list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuestDetail {
    pub guest: Guest,
    #[serde(default, deserialize_with = "valid_rows")]
    pub reservations: Vec<Reservation>,
    #[serde(default, deserialize_with = "valid_rows")]
    pub bookings: Vec<Booking>,
}

impl GuestDetail {
    pub fn booking(&self, booking_id: &str) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.id == booking_id)
    }

    /// Plan name of a reservation, looked up by `booking_id`.
    pub fn plan_name(&self, reservation: &Reservation) -> &str {
        self.booking(&reservation.booking_id)
            .map(|b| b.name.as_str())
            .unwrap_or(UNKNOWN_PLAN)
    }

    /// Most recent reservation by check-in date; the first listed wins a tie.
    pub fn latest_reservation(&self) -> Option<&Reservation> {
        self.reservations.iter().rev().max_by_key(|r| r.check_in_date)
    }

    pub fn reservation(&self, reservation_id: &str) -> Option<&Reservation> {
        self.reservations.iter().find(|r| r.id == reservation_id)
    }

    pub fn has_status(&self, status: super::ReservationStatus) -> bool {
        self.reservations.iter().any(|r| r.status == status)
    }
}

/// Exact-match lookup result of `POST /guest/match` (`{}` when nothing matched)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GuestMatch {
    #[serde(default)]
    pub guest: Option<Guest>,
}

impl GuestMatch {
    /// The matched guest. An unmatched reply may echo the query back
    /// without an id; that is not a match.
    pub fn found(&self) -> Option<&Guest> {
        self.guest.as_ref().filter(|g| !g.id.trim().is_empty())
    }
}

/// Exact-match lookup keys
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestMatchQuery {
    pub name: String,
    pub kana_name: String,
    pub phone: String,
}
