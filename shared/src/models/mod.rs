//! Front-desk data models
//!
//! Wire shapes of the hotel backend (camelCase JSON).

pub mod booking;
pub mod guest;
pub mod registration;
pub mod reservation;
pub mod serde_helpers;
pub mod user;

pub use booking::{Booking, BookingCreate};
pub use guest::{Guest, GuestDetail, GuestMatch, GuestMatchQuery, UNKNOWN_PLAN};
pub use registration::GuestRegistration;
pub use reservation::{InvalidStatus, Reservation, ReservationStatus, ReservationUpsert};
pub use user::UserCredentials;
