//! Detail-edit forms
//!
//! Each form holds the operator's raw input for one entity. Submitting goes
//! through a [`Modal`]: the form turns its input into exactly one
//! [`Mutation`] (or field errors), the modal sends it and, on success,
//! closes and asks the owning view to refresh.

pub mod booking;
pub mod guest;
pub mod modal;
pub mod registration;
pub mod reservation;
pub mod user;
pub mod validation;

use std::fmt;

use async_trait::async_trait;
use desk_client::{ClientResult, HotelApi};
use shared::models::{
    Booking, BookingCreate, Guest, GuestRegistration, ReservationUpsert, UserCredentials,
};

use crate::DeskResult;

pub use booking::{BookingAction, BookingForm, NewBookingForm};
pub use guest::{GuestAction, GuestForm};
pub use modal::{Modal, ModalPhase};
pub use registration::{RegistrationForm, normalize_gender};
pub use reservation::ReservationForm;
pub use user::UserForm;

/// One backend write
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    UpdateGuest(Guest),
    ToggleGuestDeleted { id: String, name: String },
    RegisterGuest(GuestRegistration),
    UpdateBooking(Booking),
    ToggleBookingAvailable { id: String, name: String },
    RegisterBooking(BookingCreate),
    UpdateReservation(ReservationUpsert),
    RegisterReservation(ReservationUpsert),
    RegisterUser(UserCredentials),
}

impl Mutation {
    pub async fn send(&self, api: &dyn HotelApi) -> ClientResult<String> {
        match self {
            Self::UpdateGuest(guest) => api.update_guest(guest).await,
            Self::ToggleGuestDeleted { id, name } => api.toggle_guest_deleted(id, name).await,
            Self::RegisterGuest(registration) => api.register_guest(registration).await,
            Self::UpdateBooking(booking) => api.update_booking(booking).await,
            Self::ToggleBookingAvailable { id, name } => {
                api.toggle_booking_available(id, name).await
            }
            Self::RegisterBooking(booking) => api.register_booking(booking).await,
            Self::UpdateReservation(reservation) => api.update_reservation(reservation).await,
            Self::RegisterReservation(reservation) => api.register_reservation(reservation).await,
            Self::RegisterUser(credentials) => api.register_user(credentials).await,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::UpdateGuest(_) => "update_guest",
            Self::ToggleGuestDeleted { .. } => "toggle_guest_deleted",
            Self::RegisterGuest(_) => "register_guest",
            Self::UpdateBooking(_) => "update_booking",
            Self::ToggleBookingAvailable { .. } => "toggle_booking_available",
            Self::RegisterBooking(_) => "register_booking",
            Self::UpdateReservation(_) => "update_reservation",
            Self::RegisterReservation(_) => "register_reservation",
            Self::RegisterUser(_) => "register_user",
        }
    }
}

/// Form state behind a modal
pub trait EntityForm: Clone + Send + Sync + 'static {
    /// What the submit button does (save, toggle, ...)
    type Action: Copy + Send + fmt::Debug;

    /// Validate the input and build the mutation for `action`.
    fn prepare(&self, action: Self::Action) -> DeskResult<Mutation>;
}

/// Re-fetch hook called after a successful submit
#[async_trait]
pub trait Refresh: Send + Sync {
    async fn refresh(&self);
}
