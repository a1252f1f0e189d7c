//! Front-desk dashboard
//!
//! Counts for today, derived from the staying-guest list.

use chrono::NaiveDate;
use desk_client::{GuestScope, HotelApi};
use serde::Serialize;
use shared::models::GuestDetail;

use super::guest_list::NO_PHONE;
use crate::DeskResult;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    /// Guests in the staying list
    pub staying_guests: usize,
    /// Reservations with check-in date today
    pub check_ins_today: usize,
    /// Reservations with check-out date today
    pub check_outs_today: usize,
    /// Not checked in although the check-in date has passed
    pub late_arrivals: usize,
    /// Still checked in after the check-out date
    pub overdue_departures: usize,
}

impl DashboardSummary {
    pub fn compute(details: &[GuestDetail], today: NaiveDate) -> Self {
        let reservations = || details.iter().flat_map(|d| d.reservations.iter());
        Self {
            staying_guests: details.len(),
            check_ins_today: reservations()
                .filter(|r| r.check_in_date == today)
                .count(),
            check_outs_today: reservations().filter(|r| r.check_out() == today).count(),
            late_arrivals: reservations()
                .filter(|r| r.is_late_arrival(today))
                .count(),
            overdue_departures: reservations()
                .filter(|r| r.is_overdue_departure(today))
                .count(),
        }
    }
}

/// One stay card of the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StayRow {
    pub reservation_id: String,
    pub guest_name: String,
    pub plan_name: String,
    pub phone: String,
    pub check_out: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dashboard {
    pub summary: DashboardSummary,
    pub stays: Vec<StayRow>,
}

impl Dashboard {
    pub fn from_details(details: &[GuestDetail], today: NaiveDate) -> Self {
        let stays = details
            .iter()
            .flat_map(|d| {
                d.reservations.iter().map(move |r| StayRow {
                    reservation_id: r.id.clone(),
                    guest_name: d.guest.name.clone(),
                    plan_name: d.plan_name(r).to_string(),
                    phone: if d.guest.phone.trim().is_empty() {
                        NO_PHONE.to_string()
                    } else {
                        d.guest.phone.clone()
                    },
                    check_out: r.check_out(),
                })
            })
            .collect();
        Self {
            summary: DashboardSummary::compute(details, today),
            stays,
        }
    }

    /// Load the staying list and summarize it for `today`.
    pub async fn load(api: &dyn HotelApi, today: NaiveDate) -> DeskResult<Self> {
        let details = api.guests(GuestScope::Staying).await?;
        Ok(Self::from_details(&details, today))
    }
}
