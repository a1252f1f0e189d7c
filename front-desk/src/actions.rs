//! Check-in / check-out
//!
//! A transition is prepared against the loaded list, shown to the operator,
//! and only sent once confirmed. Dropping a [`PendingTransition`] cancels it.

use std::fmt;

use shared::models::ReservationStatus;

use crate::view::GuestListView;
use crate::{DeskError, DeskResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    CheckIn,
    CheckOut,
}

impl Transition {
    pub fn label(&self) -> &'static str {
        match self {
            Self::CheckIn => "check in",
            Self::CheckOut => "check out",
        }
    }

    fn allows(&self, status: ReservationStatus) -> bool {
        match self {
            Self::CheckIn => status.can_check_in(),
            Self::CheckOut => status.can_check_out(),
        }
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A transition waiting for the operator's confirmation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTransition {
    pub kind: Transition,
    pub reservation_id: String,
    pub guest_name: String,
    pub status: ReservationStatus,
}

impl PendingTransition {
    /// Look the reservation up in `view` and check its status allows `kind`.
    pub fn prepare(view: &GuestListView, kind: Transition, reservation_id: &str) -> DeskResult<Self> {
        let (guest, reservation) = view
            .find_reservation(reservation_id)
            .ok_or_else(|| DeskError::NotFound(format!("reservation {reservation_id}")))?;
        if !kind.allows(reservation.status) {
            return Err(DeskError::TransitionNotAllowed {
                action: kind.label(),
                status: reservation.status,
            });
        }
        Ok(Self {
            kind,
            reservation_id: reservation.id,
            guest_name: guest.name,
            status: reservation.status,
        })
    }

    /// Prompt line for the confirmation step
    pub fn prompt(&self) -> String {
        format!(
            "{} {} (reservation {})?",
            capitalize(self.kind.label()),
            self.guest_name,
            self.reservation_id
        )
    }

    /// Send the transition. On success the reservation leaves the loaded
    /// list and the view refetches; on failure the list is left as it was.
    pub async fn confirm(self, view: &GuestListView) -> DeskResult<String> {
        let api = view.api().clone();
        let result = match self.kind {
            Transition::CheckIn => api.check_in(&self.reservation_id, &self.guest_name).await,
            Transition::CheckOut => api.check_out(&self.reservation_id, &self.guest_name).await,
        };
        match result {
            Ok(message) => {
                tracing::info!(
                    kind = %self.kind,
                    reservation_id = %self.reservation_id,
                    "transition confirmed"
                );
                view.remove_reservation(&self.reservation_id);
                view.refetch().await;
                Ok(message)
            }
            Err(e) => {
                tracing::warn!(
                    kind = %self.kind,
                    reservation_id = %self.reservation_id,
                    error = %e,
                    "transition failed"
                );
                Err(e.into())
            }
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
