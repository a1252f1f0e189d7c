//! Guest/reservation list view model
//!
//! Holds the fetched `GuestDetail` list of one [`GuestScope`] plus the
//! operator's criteria, toggles and page. The visible page is derived on
//! every read and never cached.
//!
//! Fetches are last-started-wins: each takes a sequence number and a
//! response that resolves after a newer fetch started is dropped. Closing
//! the view cancels whatever is in flight.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use desk_client::{GuestScope, HotelApi};
use parking_lot::RwLock;
use shared::models::{Guest, GuestDetail, Reservation, ReservationStatus};
use shared::query::{clamp_page, total_pages};
use shared::{GuestSearchCriteria, GuestSearchRequest, PAGE_SIZE, PageSlice, StatusFilter};
use tokio_util::sync::CancellationToken;

use crate::forms::Refresh;

/// Shown in the phone column when a guest has none
pub const NO_PHONE: &str = "No phone";

/// What happened to a fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Response applied to the view
    Applied,
    /// Request failed; list cleared and error set
    Failed,
    /// A newer fetch started; response dropped
    Superseded,
    /// View closed; response dropped
    Discarded,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum LastQuery {
    #[default]
    LoadAll,
    Search,
}

#[derive(Debug, Default)]
struct ViewState {
    items: Vec<GuestDetail>,
    criteria: GuestSearchCriteria,
    show_deleted: bool,
    status_filter: StatusFilter,
    page: usize,
    last_query: LastQuery,
    loading: bool,
    error: Option<String>,
}

impl ViewState {
    fn visible(&self) -> Vec<GuestDetail> {
        self.items
            .iter()
            .filter(|d| self.show_deleted || !d.guest.deleted)
            .filter(|d| self.status_filter.matches(d))
            .cloned()
            .collect()
    }
}

/// Row header of one guest on the current page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuestSummary {
    pub guest_id: String,
    pub name: String,
    pub kana_name: String,
    pub phone: String,
    /// Plan of the latest reservation by check-in date
    pub plan_name: String,
    pub latest_status: Option<ReservationStatus>,
    pub reservation_count: usize,
    pub deleted: bool,
}

impl GuestSummary {
    pub fn from_detail(detail: &GuestDetail) -> Self {
        let latest = detail.latest_reservation();
        let phone = detail.guest.phone.trim();
        Self {
            guest_id: detail.guest.id.clone(),
            name: detail.guest.name.clone(),
            kana_name: detail.guest.kana_name.clone(),
            phone: if phone.is_empty() {
                NO_PHONE.to_string()
            } else {
                phone.to_string()
            },
            plan_name: latest
                .map(|r| detail.plan_name(r))
                .unwrap_or(shared::models::UNKNOWN_PLAN)
                .to_string(),
            latest_status: latest.map(|r| r.status),
            reservation_count: detail.reservations.len(),
            deleted: detail.guest.deleted,
        }
    }
}

pub struct GuestListView {
    api: Arc<dyn HotelApi>,
    scope: GuestScope,
    state: RwLock<ViewState>,
    seq: AtomicU64,
    closed: CancellationToken,
}

impl GuestListView {
    pub fn new(api: Arc<dyn HotelApi>, scope: GuestScope) -> Self {
        Self {
            api,
            scope,
            state: RwLock::new(ViewState {
                page: 1,
                ..Default::default()
            }),
            seq: AtomicU64::new(0),
            closed: CancellationToken::new(),
        }
    }

    pub fn scope(&self) -> GuestScope {
        self.scope
    }

    pub fn api(&self) -> &Arc<dyn HotelApi> {
        &self.api
    }

    // ========== Fetching ==========

    /// Fetch the scope's unfiltered list and go to page 1.
    pub async fn load_all(&self) -> FetchOutcome {
        self.state.write().last_query = LastQuery::LoadAll;
        self.fetch(None, true).await
    }

    /// Search by criteria and go to page 1.
    ///
    /// Criteria with nothing to narrow by (after trimming and kana folding)
    /// behave as [`load_all`](Self::load_all).
    pub async fn search(&self, criteria: GuestSearchCriteria) -> FetchOutcome {
        let normalized = criteria.normalized();
        if normalized.is_empty() {
            self.state.write().criteria = normalized;
            return self.load_all().await;
        }
        if !self.scope.supports_search() {
            tracing::warn!(scope = %self.scope, "search is not offered on this list, reloading");
            return self.load_all().await;
        }
        let request = {
            let mut state = self.state.write();
            state.criteria = normalized.clone();
            state.last_query = LastQuery::Search;
            GuestSearchRequest {
                criteria: normalized,
                show_deleted: state.show_deleted,
            }
        };
        self.fetch(Some(request), true).await
    }

    /// Repeat the last load or search with the current criteria and toggles,
    /// keeping the page (clamped).
    pub async fn refetch(&self) -> FetchOutcome {
        let request = {
            let state = self.state.read();
            match state.last_query {
                LastQuery::LoadAll => None,
                LastQuery::Search => Some(GuestSearchRequest {
                    criteria: state.criteria.clone(),
                    show_deleted: state.show_deleted,
                }),
            }
        };
        self.fetch(request, false).await
    }

    async fn fetch(&self, request: Option<GuestSearchRequest>, reset_page: bool) -> FetchOutcome {
        if self.closed.is_cancelled() {
            return FetchOutcome::Discarded;
        }
        let seq = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.write().loading = true;
        tracing::debug!(scope = %self.scope, seq, search = request.is_some(), "fetching guests");

        let call = async {
            match &request {
                Some(request) => self.api.search_guests(request).await,
                None => self.api.guests(self.scope).await,
            }
        };
        let result = tokio::select! {
            _ = self.closed.cancelled() => {
                tracing::debug!(scope = %self.scope, seq, "view closed, response dropped");
                self.state.write().loading = false;
                return FetchOutcome::Discarded;
            }
            result = call => result,
        };

        // The newer fetch owns the loading flag
        if self.seq.load(Ordering::SeqCst) != seq {
            tracing::debug!(scope = %self.scope, seq, "stale response dropped");
            return FetchOutcome::Superseded;
        }

        let mut state = self.state.write();
        state.loading = false;
        match result {
            Ok(items) => {
                tracing::debug!(scope = %self.scope, count = items.len(), "guests loaded");
                state.items = items;
                state.error = None;
                state.page = if reset_page {
                    1
                } else {
                    clamp_page(state.page, state.visible().len(), PAGE_SIZE)
                };
                FetchOutcome::Applied
            }
            Err(e) => {
                tracing::warn!(scope = %self.scope, error = %e, "guest fetch failed");
                state.items.clear();
                state.error = Some(e.user_message());
                state.page = 1;
                FetchOutcome::Failed
            }
        }
    }

    /// Stop applying responses; in-flight fetches resolve as `Discarded`.
    pub fn close(&self) {
        self.closed.cancel();
        self.state.write().loading = false;
    }

    pub fn is_closed(&self) -> bool {
        self.closed.is_cancelled()
    }

    // ========== Derived state ==========

    /// Deleted guests hidden unless shown, then the status filter.
    pub fn visible(&self) -> Vec<GuestDetail> {
        self.state.read().visible()
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.visible().len(), PAGE_SIZE)
    }

    /// Current page, clamped against the visible list as it is now.
    pub fn current_page(&self) -> usize {
        let state = self.state.read();
        clamp_page(state.page, state.visible().len(), PAGE_SIZE)
    }

    /// Move to page `n`, clamped to `[1, total_pages]`.
    pub fn set_page(&self, n: usize) -> usize {
        let mut state = self.state.write();
        state.page = clamp_page(n, state.visible().len(), PAGE_SIZE);
        state.page
    }

    pub fn page(&self) -> PageSlice<GuestDetail> {
        let state = self.state.read();
        PageSlice::cut(&state.visible(), state.page, PAGE_SIZE)
    }

    pub fn summaries(&self) -> PageSlice<GuestSummary> {
        let page = self.page();
        PageSlice {
            items: page.items.iter().map(GuestSummary::from_detail).collect(),
            page: page.page,
            total_pages: page.total_pages,
            total: page.total,
            first: page.first,
            last: page.last,
        }
    }

    // ========== Toggles ==========

    pub fn set_show_deleted(&self, show: bool) {
        self.state.write().show_deleted = show;
    }

    pub fn show_deleted(&self) -> bool {
        self.state.read().show_deleted
    }

    pub fn set_status_filter(&self, filter: StatusFilter) {
        self.state.write().status_filter = filter;
    }

    pub fn status_filter(&self) -> StatusFilter {
        self.state.read().status_filter
    }

    pub fn criteria(&self) -> GuestSearchCriteria {
        self.state.read().criteria.clone()
    }

    /// Reset criteria, status filter and page without fetching.
    pub fn clear(&self) {
        let mut state = self.state.write();
        state.criteria = GuestSearchCriteria::default();
        state.status_filter = StatusFilter::All;
        state.page = 1;
        state.last_query = LastQuery::LoadAll;
    }

    pub fn is_loading(&self) -> bool {
        self.state.read().loading
    }

    /// Last fetch error, cleared by the next successful fetch
    pub fn error(&self) -> Option<String> {
        self.state.read().error.clone()
    }

    pub fn items(&self) -> Vec<GuestDetail> {
        self.state.read().items.clone()
    }

    // ========== Local patches ==========

    /// Guest and reservation for `reservation_id` in the loaded list
    pub fn find_reservation(&self, reservation_id: &str) -> Option<(Guest, Reservation)> {
        let state = self.state.read();
        state.items.iter().find_map(|d| {
            d.reservation(reservation_id)
                .map(|r| (d.guest.clone(), r.clone()))
        })
    }

    /// Drop a reservation from the loaded list, and its guest entry when it
    /// was the guest's only one. Returns false when it was not loaded.
    pub fn remove_reservation(&self, reservation_id: &str) -> bool {
        let mut state = self.state.write();
        let Some(index) = state
            .items
            .iter()
            .position(|d| d.reservation(reservation_id).is_some())
        else {
            return false;
        };
        let detail = &mut state.items[index];
        detail.reservations.retain(|r| r.id != reservation_id);
        if detail.reservations.is_empty() {
            state.items.remove(index);
        }
        true
    }
}

#[async_trait]
impl Refresh for GuestListView {
    async fn refresh(&self) {
        self.refetch().await;
    }
}

impl Drop for GuestListView {
    fn drop(&mut self) {
        self.closed.cancel();
    }
}
