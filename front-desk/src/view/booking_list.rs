//! Booking plan catalog view

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use desk_client::HotelApi;
use parking_lot::RwLock;
use shared::models::Booking;
use shared::query::{clamp_page, total_pages};
use shared::{PAGE_SIZE, PageSlice};
use tokio_util::sync::CancellationToken;

use super::FetchOutcome;
use crate::forms::Refresh;

#[derive(Debug)]
struct CatalogState {
    items: Vec<Booking>,
    show_unavailable: bool,
    page: usize,
    loading: bool,
    error: Option<String>,
}

impl CatalogState {
    fn visible(&self) -> Vec<Booking> {
        self.items
            .iter()
            .filter(|b| self.show_unavailable || b.is_available)
            .cloned()
            .collect()
    }
}

pub struct BookingCatalogView {
    api: Arc<dyn HotelApi>,
    state: RwLock<CatalogState>,
    seq: AtomicU64,
    closed: CancellationToken,
}

impl BookingCatalogView {
    pub fn new(api: Arc<dyn HotelApi>) -> Self {
        Self {
            api,
            state: RwLock::new(CatalogState {
                items: Vec::new(),
                show_unavailable: false,
                page: 1,
                loading: false,
                error: None,
            }),
            seq: AtomicU64::new(0),
            closed: CancellationToken::new(),
        }
    }

    pub async fn load(&self) -> FetchOutcome {
        if self.closed.is_cancelled() {
            return FetchOutcome::Discarded;
        }
        let seq = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.write().loading = true;

        let result = tokio::select! {
            _ = self.closed.cancelled() => {
                self.state.write().loading = false;
                return FetchOutcome::Discarded;
            }
            result = self.api.bookings() => result,
        };
        // The newer load owns the loading flag
        if self.seq.load(Ordering::SeqCst) != seq {
            return FetchOutcome::Superseded;
        }

        let mut state = self.state.write();
        state.loading = false;
        match result {
            Ok(items) => {
                tracing::debug!(count = items.len(), "bookings loaded");
                state.items = items;
                state.error = None;
                state.page = clamp_page(state.page, state.visible().len(), PAGE_SIZE);
                FetchOutcome::Applied
            }
            Err(e) => {
                tracing::warn!(error = %e, "booking fetch failed");
                state.items.clear();
                state.error = Some(e.user_message());
                state.page = 1;
                FetchOutcome::Failed
            }
        }
    }

    pub fn close(&self) {
        self.closed.cancel();
        self.state.write().loading = false;
    }

    pub fn visible(&self) -> Vec<Booking> {
        self.state.read().visible()
    }

    pub fn set_show_unavailable(&self, show: bool) {
        self.state.write().show_unavailable = show;
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.visible().len(), PAGE_SIZE)
    }

    pub fn set_page(&self, n: usize) -> usize {
        let mut state = self.state.write();
        state.page = clamp_page(n, state.visible().len(), PAGE_SIZE);
        state.page
    }

    pub fn page(&self) -> PageSlice<Booking> {
        let state = self.state.read();
        PageSlice::cut(&state.visible(), state.page, PAGE_SIZE)
    }

    /// Plan by id among everything loaded, available or not
    pub fn find(&self, booking_id: &str) -> Option<Booking> {
        self.state
            .read()
            .items
            .iter()
            .find(|b| b.id == booking_id)
            .cloned()
    }

    pub fn error(&self) -> Option<String> {
        self.state.read().error.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.read().loading
    }
}

#[async_trait]
impl Refresh for BookingCatalogView {
    async fn refresh(&self) {
        self.load().await;
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::forms::{BookingAction, BookingForm, Modal};
    use crate::testing::{FakeHotel, booking};

    const PLAN_ID: &str = "6a1f0d3e-2b4c-4d5e-9f60-718293a4b5c6";

    fn catalog() -> Vec<Booking> {
        let mut plans: Vec<Booking> = (1..=25)
            .map(|n| booking(&format!("B{n}"), &format!("Plan {n}"), 8000 + n as i64))
            .collect();
        plans[0].id = PLAN_ID.into();
        plans[1].is_available = false;
        plans[2].is_available = false;
        plans
    }

    #[tokio::test]
    async fn test_unavailable_hidden_by_default() {
        let fake = Arc::new(FakeHotel::new());
        fake.set_bookings(catalog());
        let view = BookingCatalogView::new(fake.clone());
        assert_eq!(view.load().await, FetchOutcome::Applied);

        assert_eq!(view.visible().len(), 23);
        assert_eq!(view.total_pages(), 2);
        assert_eq!(view.set_page(5), 2);
        assert_eq!(view.page().items.len(), 3);

        view.set_show_unavailable(true);
        assert_eq!(view.visible().len(), 25);
        assert!(view.find("B2").is_some());
    }

    #[tokio::test]
    async fn test_toggle_through_modal_refreshes_catalog() {
        let fake = Arc::new(FakeHotel::new());
        fake.set_bookings(catalog());
        let view = Arc::new(BookingCatalogView::new(fake.clone()));
        view.load().await;

        let plan = view.find(PLAN_ID).unwrap();
        let modal = Modal::new(fake.clone()).with_refresh(view.clone());
        modal.open(BookingForm::from_booking(&plan)).unwrap();
        modal.submit(BookingAction::ToggleAvailable).await.unwrap();

        assert!(!view.find(PLAN_ID).unwrap().is_available);
        assert_eq!(view.visible().len(), 22);
        assert_eq!(
            fake.calls(),
            vec!["GET /bookings", "PUT /booking/deleted", "GET /bookings"]
        );
    }

    #[tokio::test]
    async fn test_failure_sets_error() {
        let fake = Arc::new(FakeHotel::new());
        fake.fail_next(500, "");
        let view = BookingCatalogView::new(fake.clone());
        assert_eq!(view.load().await, FetchOutcome::Failed);
        assert_eq!(view.error().as_deref(), Some("Request failed (500)"));
    }

    #[tokio::test]
    async fn test_close_clears_loading() {
        let fake = Arc::new(FakeHotel::new());
        fake.set_bookings(catalog());
        fake.set_delay(Duration::from_millis(100));
        let view = Arc::new(BookingCatalogView::new(fake.clone()));

        let pending = tokio::spawn({
            let view = view.clone();
            async move { view.load().await }
        });
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(view.is_loading());
        view.close();

        assert_eq!(pending.await.unwrap(), FetchOutcome::Discarded);
        assert!(!view.is_loading());
        assert!(view.visible().is_empty());
    }
}
