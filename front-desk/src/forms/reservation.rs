//! Edit-reservation form
//!
//! A reservation with a UUID id is updated in place; anything else (a new
//! row, or a placeholder id) is registered and the backend assigns the id.

use shared::models::{Reservation, ReservationStatus, ReservationUpsert};

use super::validation::{MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, Validator, is_uuid};
use super::{EntityForm, Mutation};
use crate::{DeskError, DeskResult};

#[derive(Debug, Clone, PartialEq)]
pub struct ReservationForm {
    pub id: String,
    pub guest_id: String,
    pub booking_id: String,
    pub check_in_date: String,
    pub stay_days: String,
    pub total_price: String,
    pub status: ReservationStatus,
    pub memo: String,
    /// Status when the form was opened; `None` for a new reservation
    pub original_status: Option<ReservationStatus>,
}

impl ReservationForm {
    pub fn from_reservation(reservation: &Reservation) -> Self {
        Self {
            id: reservation.id.clone(),
            guest_id: reservation.guest_id.clone(),
            booking_id: reservation.booking_id.clone(),
            check_in_date: reservation.check_in_date.to_string(),
            stay_days: reservation.stay_days.to_string(),
            total_price: reservation.total_price.to_string(),
            status: reservation.status,
            memo: reservation.memo.clone().unwrap_or_default(),
            original_status: Some(reservation.status),
        }
    }

    /// Blank reservation for `guest_id`
    pub fn new_for_guest(guest_id: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            guest_id: guest_id.into(),
            booking_id: String::new(),
            check_in_date: String::new(),
            stay_days: "1".into(),
            total_price: String::new(),
            status: ReservationStatus::NotCheckedIn,
            memo: String::new(),
            original_status: None,
        }
    }

    /// Whether submitting updates an existing reservation.
    pub fn is_update(&self) -> bool {
        is_uuid(&self.id)
    }
}

impl EntityForm for ReservationForm {
    type Action = ();

    fn prepare(&self, _: ()) -> DeskResult<Mutation> {
        let mut v = Validator::new();
        let guest_id = v.required("guestId", "Guest ID", &self.guest_id, MAX_SHORT_TEXT_LEN);
        let booking_id = v.uuid("bookingId", "Plan", &self.booking_id);
        let check_in_date = v.date("checkInDate", "Check-in date", &self.check_in_date, true);
        let stay_days = v.stay_days("stayDays", &self.stay_days);
        let total_price = v.decimal("totalPrice", "Total price", &self.total_price, false);
        let memo = v.optional("memo", "Memo", &self.memo, MAX_NOTE_LEN);
        if let Some(from) = self.original_status
            && !from.can_transition_to(self.status)
        {
            v.fail(
                "status",
                format!("Cannot change from {} to {}", from.label(), self.status.label()),
            );
        }
        v.finish()?;

        let check_in_date = check_in_date
            .ok_or_else(|| DeskError::field("checkInDate", "Check-in date is required"))?;
        let upsert = ReservationUpsert {
            id: self.is_update().then(|| self.id.trim().to_string()),
            guest_id,
            booking_id,
            check_in_date,
            stay_days,
            total_price,
            status: self.status,
            memo,
        };
        Ok(if upsert.id.is_some() {
            Mutation::UpdateReservation(upsert)
        } else {
            Mutation::RegisterReservation(upsert)
        })
    }
}
