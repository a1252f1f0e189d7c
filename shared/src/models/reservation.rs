//! Reservation Model

use std::fmt;
use std::str::FromStr;

use chrono::{Days, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::serde_helpers::null_default;

/// Reservation lifecycle status
///
/// ```text
/// TEMPORARY ──┐
///             ├─ check-in ─> CHECKED_IN ─ check-out ─> CHECKED_OUT
/// NOT_CHECKED_IN
///
/// any non-terminal ─ edit ─> CANCELLED
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReservationStatus {
    Temporary,
    NotCheckedIn,
    CheckedIn,
    CheckedOut,
    Cancelled,
}

impl ReservationStatus {
    pub const ALL: [ReservationStatus; 5] = [
        Self::Temporary,
        Self::NotCheckedIn,
        Self::CheckedIn,
        Self::CheckedOut,
        Self::Cancelled,
    ];

    /// Wire name (`NOT_CHECKED_IN`, ...)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Temporary => "TEMPORARY",
            Self::NotCheckedIn => "NOT_CHECKED_IN",
            Self::CheckedIn => "CHECKED_IN",
            Self::CheckedOut => "CHECKED_OUT",
            Self::Cancelled => "CANCELLED",
        }
    }

    /// Label shown at the front desk
    pub fn label(&self) -> &'static str {
        match self {
            Self::Temporary => "Tentative",
            Self::NotCheckedIn => "Awaiting check-in",
            Self::CheckedIn => "Checked in",
            Self::CheckedOut => "Checked out",
            Self::Cancelled => "Cancelled",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::CheckedOut | Self::Cancelled)
    }

    pub fn can_check_in(&self) -> bool {
        matches!(self, Self::Temporary | Self::NotCheckedIn)
    }

    pub fn can_check_out(&self) -> bool {
        matches!(self, Self::CheckedIn)
    }

    /// Whether an edit may move a reservation from `self` to `next`.
    pub fn can_transition_to(&self, next: ReservationStatus) -> bool {
        if *self == next {
            return true;
        }
        match next {
            Self::Cancelled => !self.is_terminal(),
            Self::CheckedIn => self.can_check_in(),
            Self::CheckedOut => self.can_check_out(),
            Self::NotCheckedIn => *self == Self::Temporary,
            Self::Temporary => false,
        }
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown status string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown reservation status: {0}")]
pub struct InvalidStatus(pub String);

impl FromStr for ReservationStatus {
    type Err = InvalidStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == normalized)
            .ok_or_else(|| InvalidStatus(s.to_string()))
    }
}

/// Reservation entity (one guest's stay against one booking plan)
///
/// `checkInDate`, `stayDays` and `status` are required; a row without them
/// cannot be placed on the calendar and does not decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    #[serde(default, deserialize_with = "null_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_default")]
    pub guest_id: String,
    #[serde(default, deserialize_with = "null_default")]
    pub booking_id: String,
    pub check_in_date: NaiveDate,
    /// Absent on older payloads; see [`Reservation::check_out`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_out_date: Option<NaiveDate>,
    pub stay_days: u32,
    #[serde(default, deserialize_with = "null_default")]
    pub total_price: Decimal,
    pub status: ReservationStatus,
    #[serde(default)]
    pub memo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl Reservation {
    /// Check-out date, derived as check-in + stay days when the backend omits it.
    pub fn check_out(&self) -> NaiveDate {
        self.check_out_date.unwrap_or_else(|| {
            self.check_in_date
                .checked_add_days(Days::new(u64::from(self.stay_days)))
                .unwrap_or(self.check_in_date)
        })
    }

    /// Should have arrived before `today` but has not checked in.
    pub fn is_late_arrival(&self, today: NaiveDate) -> bool {
        self.status.can_check_in() && self.check_in_date < today
    }

    /// Still in-house after the scheduled check-out date.
    pub fn is_overdue_departure(&self, today: NaiveDate) -> bool {
        self.status == ReservationStatus::CheckedIn && self.check_out() < today
    }
}

/// Create/update reservation payload
///
/// `id` is omitted for `POST /reservation/register`; the backend assigns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationUpsert {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub guest_id: String,
    pub booking_id: String,
    pub check_in_date: NaiveDate,
    pub stay_days: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_price: Option<Decimal>,
    pub status: ReservationStatus,
    pub memo: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample(status: ReservationStatus) -> Reservation {
        serde_json::from_value(json!({
            "id": "R1",
            "guestId": "G1",
            "bookingId": "B1",
            "checkInDate": "2025-08-10",
            "stayDays": 3,
            "totalPrice": 36000,
            "status": status.as_str(),
            "memo": null
        }))
        .unwrap()
    }

    #[test]
    fn test_check_out_derived_from_stay_days() {
        let r = sample(ReservationStatus::NotCheckedIn);
        assert_eq!(r.check_out_date, None);
        assert_eq!(r.check_out(), NaiveDate::from_ymd_opt(2025, 8, 13).unwrap());
    }

    #[test]
    fn test_explicit_check_out_wins() {
        let mut r = sample(ReservationStatus::NotCheckedIn);
        r.check_out_date = NaiveDate::from_ymd_opt(2025, 8, 20);
        assert_eq!(r.check_out(), NaiveDate::from_ymd_opt(2025, 8, 20).unwrap());
    }

    #[test]
    fn test_status_wire_names() {
        assert_eq!(
            serde_json::to_value(ReservationStatus::NotCheckedIn).unwrap(),
            json!("NOT_CHECKED_IN")
        );
        assert_eq!(
            "checked-in".parse::<ReservationStatus>().unwrap(),
            ReservationStatus::CheckedIn
        );
        assert!("ARRIVED".parse::<ReservationStatus>().is_err());
    }

    #[test]
    fn test_status_transitions() {
        use ReservationStatus::*;
        assert!(Temporary.can_transition_to(CheckedIn));
        assert!(NotCheckedIn.can_transition_to(CheckedIn));
        assert!(CheckedIn.can_transition_to(CheckedOut));
        assert!(CheckedIn.can_transition_to(Cancelled));
        assert!(!CheckedOut.can_transition_to(Cancelled));
        assert!(!Cancelled.can_transition_to(NotCheckedIn));
        assert!(!NotCheckedIn.can_transition_to(CheckedOut));
    }

    #[test]
    fn test_lateness() {
        let today = NaiveDate::from_ymd_opt(2025, 8, 11).unwrap();
        let waiting = sample(ReservationStatus::NotCheckedIn);
        assert!(waiting.is_late_arrival(today));
        assert!(!waiting.is_overdue_departure(today));

        let in_house = sample(ReservationStatus::CheckedIn);
        assert!(!in_house.is_late_arrival(today));
        assert!(!in_house.is_overdue_departure(today));
        let later = NaiveDate::from_ymd_opt(2025, 8, 14).unwrap();
        assert!(in_house.is_overdue_departure(later));
    }

    #[test]
    fn test_upsert_omits_missing_id() {
        let payload = ReservationUpsert {
            id: None,
            guest_id: "G1".into(),
            booking_id: "B1".into(),
            check_in_date: NaiveDate::from_ymd_opt(2025, 8, 10).unwrap(),
            stay_days: 2,
            total_price: None,
            status: ReservationStatus::Temporary,
            memo: String::new(),
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert!(value.get("id").is_none());
        assert_eq!(value["checkInDate"], json!("2025-08-10"));
    }
}
