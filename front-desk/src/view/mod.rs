//! List view models
//!
//! Each view owns its fetched data; everything the operator sees is derived
//! from it on read.

mod booking_list;
mod dashboard;
mod guest_list;

pub use booking_list::BookingCatalogView;
pub use dashboard::{Dashboard, DashboardSummary, StayRow};
pub use guest_list::{FetchOutcome, GuestListView, GuestSummary, NO_PHONE};
