//! Desk Client - HTTP client for the hotel backend
//!
//! Provides the cookie-session transport and the [`HotelApi`] operations
//! used by the front-desk views.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod http;

pub use api::{GuestScope, HotelApi};
pub use client::HotelClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::{ApiPayload, NetworkHttpClient};

// Re-export shared types for convenience
pub use shared::models::{
    Booking, BookingCreate, Guest, GuestDetail, GuestMatch, GuestMatchQuery, GuestRegistration,
    Reservation, ReservationStatus, ReservationUpsert, UserCredentials,
};
