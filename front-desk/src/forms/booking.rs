//! Booking plan forms

use shared::models::{Booking, BookingCreate};

use super::validation::{MAX_NAME_LEN, MAX_NOTE_LEN, Validator};
use super::{EntityForm, Mutation};
use crate::DeskResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingAction {
    Save,
    /// `PUT /booking/deleted`
    ToggleAvailable,
}

/// Edit an existing plan
#[derive(Debug, Clone, PartialEq)]
pub struct BookingForm {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: String,
    pub is_available: bool,
    pub user_id: Option<String>,
}

impl BookingForm {
    pub fn from_booking(booking: &Booking) -> Self {
        Self {
            id: booking.id.clone(),
            name: booking.name.clone(),
            description: booking.description.clone(),
            price: booking.price.to_string(),
            is_available: booking.is_available,
            user_id: booking.user_id.clone(),
        }
    }

    pub fn toggle_label(&self) -> &'static str {
        if self.is_available {
            "Stop selling"
        } else {
            "Resume selling"
        }
    }
}

impl EntityForm for BookingForm {
    type Action = BookingAction;

    fn prepare(&self, action: BookingAction) -> DeskResult<Mutation> {
        let mut v = Validator::new();
        let id = v.uuid("id", "Booking ID", &self.id);
        match action {
            BookingAction::Save => {
                let name = v.required("name", "Plan name", &self.name, MAX_NAME_LEN);
                let description =
                    v.optional("description", "Description", &self.description, MAX_NOTE_LEN);
                let price = v.decimal("price", "Price", &self.price, true);
                v.finish()?;
                Ok(Mutation::UpdateBooking(Booking {
                    id,
                    name,
                    description,
                    price: price.unwrap_or_default(),
                    is_available: self.is_available,
                    user_id: self.user_id.clone(),
                }))
            }
            BookingAction::ToggleAvailable => {
                v.finish()?;
                Ok(Mutation::ToggleBookingAvailable {
                    id,
                    name: self.name.trim().to_string(),
                })
            }
        }
    }
}

/// Register a new plan; new plans start out available
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewBookingForm {
    pub name: String,
    pub description: String,
    pub price: String,
}

impl EntityForm for NewBookingForm {
    type Action = ();

    fn prepare(&self, _: ()) -> DeskResult<Mutation> {
        let mut v = Validator::new();
        let name = v.required("name", "Plan name", &self.name, MAX_NAME_LEN);
        let description =
            v.optional("description", "Description", &self.description, MAX_NOTE_LEN);
        let price = v.decimal("price", "Price", &self.price, true);
        v.finish()?;
        Ok(Mutation::RegisterBooking(BookingCreate {
            name,
            description,
            price: price.unwrap_or_default(),
            is_available: true,
        }))
    }
}
