//! Hotel backend operations
//!
//! [`HotelApi`] is object safe so views and forms hold an
//! `Arc<dyn HotelApi>` and tests can swap in an in-memory backend.

use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use shared::GuestSearchRequest;
use shared::models::{
    Booking, BookingCreate, Guest, GuestDetail, GuestMatch, GuestMatchQuery, GuestRegistration,
    ReservationUpsert, UserCredentials,
};

use crate::ClientResult;

/// Which unfiltered guest listing a view loads
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum GuestScope {
    /// Every guest (`GET /guests`)
    #[default]
    All,
    /// Guests currently in the hotel (`GET /guests/stay`)
    Staying,
    /// Guests due to check in today (`GET /guests/check-in-today`)
    ArrivalsToday,
    /// Guests due to check out today (`GET /guests/check-out-today`)
    DeparturesToday,
}

impl GuestScope {
    pub const ALL: [GuestScope; 4] = [
        Self::All,
        Self::Staying,
        Self::ArrivalsToday,
        Self::DeparturesToday,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Self::All => "/guests",
            Self::Staying => "/guests/stay",
            Self::ArrivalsToday => "/guests/check-in-today",
            Self::DeparturesToday => "/guests/check-out-today",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All guests",
            Self::Staying => "Staying guests",
            Self::ArrivalsToday => "Arrivals today",
            Self::DeparturesToday => "Departures today",
        }
    }

    /// Search is offered on the full registry only.
    pub fn supports_search(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl fmt::Display for GuestScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for GuestScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" | "guests" => Ok(Self::All),
            "stay" | "staying" => Ok(Self::Staying),
            "arrivals" | "check-in-today" => Ok(Self::ArrivalsToday),
            "departures" | "check-out-today" => Ok(Self::DeparturesToday),
            other => Err(format!("unknown guest scope: {other}")),
        }
    }
}

/// Every backend call the front desk makes
///
/// Mutations return the server's confirmation text, falling back to a
/// generic message when the body was empty.
#[async_trait]
pub trait HotelApi: Send + Sync {
    // ---- guests ----
    async fn guests(&self, scope: GuestScope) -> ClientResult<Vec<GuestDetail>>;
    async fn search_guests(&self, request: &GuestSearchRequest) -> ClientResult<Vec<GuestDetail>>;
    async fn match_guest(&self, query: &GuestMatchQuery) -> ClientResult<GuestMatch>;
    async fn update_guest(&self, guest: &Guest) -> ClientResult<String>;
    async fn toggle_guest_deleted(&self, id: &str, name: &str) -> ClientResult<String>;
    async fn register_guest(&self, registration: &GuestRegistration) -> ClientResult<String>;
    async fn check_in(&self, reservation_id: &str, guest_name: &str) -> ClientResult<String>;
    async fn check_out(&self, reservation_id: &str, guest_name: &str) -> ClientResult<String>;

    // ---- bookings ----
    async fn bookings(&self) -> ClientResult<Vec<Booking>>;
    async fn update_booking(&self, booking: &Booking) -> ClientResult<String>;
    async fn register_booking(&self, booking: &BookingCreate) -> ClientResult<String>;
    async fn toggle_booking_available(&self, id: &str, name: &str) -> ClientResult<String>;

    // ---- reservations ----
    async fn update_reservation(&self, reservation: &ReservationUpsert) -> ClientResult<String>;
    async fn register_reservation(&self, reservation: &ReservationUpsert)
    -> ClientResult<String>;

    // ---- session ----
    async fn login(&self, credentials: &UserCredentials) -> ClientResult<()>;
    async fn logout(&self) -> ClientResult<()>;
    async fn register_user(&self, credentials: &UserCredentials) -> ClientResult<String>;
    /// Cheap authenticated call; `Err` means the session is not usable.
    async fn probe_session(&self) -> ClientResult<()>;
}
