//! In-memory `HotelApi` for view and form tests

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use desk_client::{ClientError, ClientResult, GuestScope, HotelApi};
use parking_lot::Mutex;
use rust_decimal::Decimal;
use shared::GuestSearchRequest;
use shared::models::{
    Booking, BookingCreate, Guest, GuestDetail, GuestMatch, GuestMatchQuery, GuestRegistration,
    Reservation, ReservationStatus, ReservationUpsert, UserCredentials,
};

/// "Today" as the fake backend sees it
pub fn fake_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 8, 10).unwrap()
}

pub fn booking(id: &str, name: &str, price: i64) -> Booking {
    Booking {
        id: id.into(),
        name: name.into(),
        description: String::new(),
        price: Decimal::from(price),
        is_available: true,
        user_id: None,
    }
}

pub fn reservation(
    id: &str,
    guest_id: &str,
    status: ReservationStatus,
    check_in: NaiveDate,
) -> Reservation {
    Reservation {
        id: id.into(),
        guest_id: guest_id.into(),
        booking_id: "B1".into(),
        check_in_date: check_in,
        check_out_date: None,
        stay_days: 1,
        total_price: Decimal::from(12000),
        status,
        memo: None,
        created_at: None,
        user_id: None,
    }
}

/// Guest `G{n}` with one reservation `R{n}` arriving today
pub fn guest_detail(n: usize, deleted: bool) -> GuestDetail {
    let id = format!("G{n}");
    GuestDetail {
        guest: Guest {
            id: id.clone(),
            name: format!("Guest {n}"),
            kana_name: "タナカ".into(),
            gender: "男性".into(),
            age: Some(30),
            region: "東京都".into(),
            email: format!("guest{n}@example.com"),
            phone: format!("090{n:08}"),
            deleted,
        },
        reservations: vec![reservation(
            &format!("R{n}"),
            &id,
            ReservationStatus::NotCheckedIn,
            fake_today(),
        )],
        bookings: vec![booking("B1", "Breakfast", 12000)],
    }
}

/// 45 guests; every ninth one (G9, G18, ...) soft-deleted
pub fn forty_five_guests() -> Vec<GuestDetail> {
    (1..=45).map(|n| guest_detail(n, n % 9 == 0)).collect()
}

#[derive(Default)]
pub struct FakeHotel {
    guests: Mutex<Vec<GuestDetail>>,
    bookings: Mutex<Vec<Booking>>,
    calls: Mutex<Vec<String>>,
    failure: Mutex<Option<(u16, String)>>,
    delay: Mutex<Duration>,
    delays: Mutex<VecDeque<Duration>>,
    matched: Mutex<Option<Guest>>,
    last_match: Mutex<Option<GuestMatchQuery>>,
    last_search: Mutex<Option<GuestSearchRequest>>,
    logged_out: AtomicBool,
}

impl FakeHotel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_guests(guests: Vec<GuestDetail>) -> Self {
        let fake = Self::new();
        *fake.guests.lock() = guests;
        fake
    }

    pub fn set_guests(&self, guests: Vec<GuestDetail>) {
        *self.guests.lock() = guests;
    }

    pub fn set_bookings(&self, bookings: Vec<Booking>) {
        *self.bookings.lock() = bookings;
    }

    /// Every call recorded as `METHOD /path`
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    /// The next call fails with this status and body.
    pub fn fail_next(&self, status: u16, body: &str) {
        *self.failure.lock() = Some((status, body.to_string()));
    }

    /// Delay applied to every call
    pub fn set_delay(&self, delay: Duration) {
        *self.delay.lock() = delay;
    }

    /// Per-call delays, consumed in call order before the fixed one
    pub fn queue_delays(&self, delays: impl IntoIterator<Item = Duration>) {
        self.delays.lock().extend(delays);
    }

    pub fn set_match(&self, guest: Option<Guest>) {
        *self.matched.lock() = guest;
    }

    pub fn last_match(&self) -> Option<GuestMatchQuery> {
        self.last_match.lock().clone()
    }

    pub fn last_search(&self) -> Option<GuestSearchRequest> {
        self.last_search.lock().clone()
    }

    pub fn set_logged_out(&self, logged_out: bool) {
        self.logged_out.store(logged_out, Ordering::SeqCst);
    }

    async fn enter(&self, call: impl Into<String>) -> ClientResult<()> {
        self.calls.lock().push(call.into());
        let delay = self
            .delays
            .lock()
            .pop_front()
            .unwrap_or_else(|| *self.delay.lock());
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        match self.failure.lock().take() {
            Some((status, body)) => Err(ClientError::from_status(status, &body)),
            None => Ok(()),
        }
    }

    fn set_status(&self, reservation_id: &str, status: ReservationStatus) -> ClientResult<String> {
        let mut guests = self.guests.lock();
        for detail in guests.iter_mut() {
            if let Some(r) = detail
                .reservations
                .iter_mut()
                .find(|r| r.id == reservation_id)
            {
                r.status = status;
                return Ok(detail.guest.name.clone());
            }
        }
        Err(ClientError::from_status(404, "予約が見つかりません"))
    }

    fn scoped(&self, scope: GuestScope) -> Vec<GuestDetail> {
        let today = fake_today();
        let keep = |r: &Reservation| match scope {
            GuestScope::All => true,
            GuestScope::Staying => r.status == ReservationStatus::CheckedIn,
            GuestScope::ArrivalsToday => r.status.can_check_in() && r.check_in_date == today,
            GuestScope::DeparturesToday => {
                r.status == ReservationStatus::CheckedIn && r.check_out() == today
            }
        };
        self.guests
            .lock()
            .iter()
            .filter_map(|d| {
                let reservations: Vec<_> = d
                    .reservations
                    .iter()
                    .filter(|&r| keep(r))
                    .cloned()
                    .collect();
                if scope != GuestScope::All && reservations.is_empty() {
                    return None;
                }
                Some(GuestDetail {
                    reservations,
                    ..d.clone()
                })
            })
            .collect()
    }
}

#[async_trait]
impl HotelApi for FakeHotel {
    async fn guests(&self, scope: GuestScope) -> ClientResult<Vec<GuestDetail>> {
        self.enter(format!("GET {}", scope.path())).await?;
        Ok(self.scoped(scope))
    }

    async fn search_guests(&self, request: &GuestSearchRequest) -> ClientResult<Vec<GuestDetail>> {
        self.enter("POST /guest/search").await?;
        *self.last_search.lock() = Some(request.clone());
        let c = &request.criteria;
        Ok(self
            .guests
            .lock()
            .iter()
            .filter(|d| request.show_deleted || !d.guest.deleted)
            .filter(|d| c.name.is_empty() || d.guest.name.contains(&c.name))
            .filter(|d| c.kana_name.is_empty() || d.guest.kana_name.contains(&c.kana_name))
            .filter(|d| c.phone.is_empty() || d.guest.phone == c.phone)
            .cloned()
            .collect())
    }

    async fn match_guest(&self, query: &GuestMatchQuery) -> ClientResult<GuestMatch> {
        self.enter("POST /guest/match").await?;
        *self.last_match.lock() = Some(query.clone());
        Ok(GuestMatch {
            guest: self.matched.lock().clone(),
        })
    }

    async fn update_guest(&self, guest: &Guest) -> ClientResult<String> {
        self.enter("PUT /guest/update").await?;
        if let Some(d) = self.guests.lock().iter_mut().find(|d| d.guest.id == guest.id) {
            d.guest = Guest {
                deleted: d.guest.deleted,
                ..guest.clone()
            };
        }
        Ok("Guest updated".into())
    }

    async fn toggle_guest_deleted(&self, id: &str, _name: &str) -> ClientResult<String> {
        self.enter("PUT /guest/deleted").await?;
        if let Some(d) = self.guests.lock().iter_mut().find(|d| d.guest.id == id) {
            d.guest.deleted = !d.guest.deleted;
        }
        Ok("Guest status changed".into())
    }

    async fn register_guest(&self, _registration: &GuestRegistration) -> ClientResult<String> {
        self.enter("PUT /guest/register").await?;
        Ok("Guest registered".into())
    }

    async fn check_in(&self, reservation_id: &str, _guest_name: &str) -> ClientResult<String> {
        self.enter("PUT /guest/checkIn").await?;
        let name = self.set_status(reservation_id, ReservationStatus::CheckedIn)?;
        Ok(format!("{name}様のチェックインが完了しました"))
    }

    async fn check_out(&self, reservation_id: &str, _guest_name: &str) -> ClientResult<String> {
        self.enter("PUT /guest/checkOut").await?;
        let name = self.set_status(reservation_id, ReservationStatus::CheckedOut)?;
        Ok(format!("{name}様のチェックアウトが完了しました"))
    }

    async fn bookings(&self) -> ClientResult<Vec<Booking>> {
        self.enter("GET /bookings").await?;
        Ok(self.bookings.lock().clone())
    }

    async fn update_booking(&self, booking: &Booking) -> ClientResult<String> {
        self.enter("PUT /booking/update").await?;
        if let Some(b) = self.bookings.lock().iter_mut().find(|b| b.id == booking.id) {
            *b = booking.clone();
        }
        Ok("Booking updated".into())
    }

    async fn register_booking(&self, _booking: &BookingCreate) -> ClientResult<String> {
        self.enter("PUT /booking/register").await?;
        Ok("Booking registered".into())
    }

    async fn toggle_booking_available(&self, id: &str, _name: &str) -> ClientResult<String> {
        self.enter("PUT /booking/deleted").await?;
        if let Some(b) = self.bookings.lock().iter_mut().find(|b| b.id == id) {
            b.is_available = !b.is_available;
        }
        Ok("Booking availability changed".into())
    }

    async fn update_reservation(&self, _reservation: &ReservationUpsert) -> ClientResult<String> {
        self.enter("PUT /reservation/update").await?;
        Ok("Reservation updated".into())
    }

    async fn register_reservation(
        &self,
        _reservation: &ReservationUpsert,
    ) -> ClientResult<String> {
        self.enter("POST /reservation/register").await?;
        Ok("Reservation registered".into())
    }

    async fn login(&self, credentials: &UserCredentials) -> ClientResult<()> {
        self.enter("POST /login").await?;
        if credentials.password != "secret" {
            return Err(ClientError::from_status(401, "Bad credentials"));
        }
        self.set_logged_out(false);
        Ok(())
    }

    async fn logout(&self) -> ClientResult<()> {
        let result = self.enter("POST /user/logout").await;
        self.set_logged_out(true);
        result
    }

    async fn register_user(&self, _credentials: &UserCredentials) -> ClientResult<String> {
        self.enter("PUT /user/register").await?;
        Ok("User registered".into())
    }

    async fn probe_session(&self) -> ClientResult<()> {
        self.enter("GET /guests/stay").await?;
        if self.logged_out.load(Ordering::SeqCst) {
            return Err(ClientError::from_status(401, ""));
        }
        Ok(())
    }
}
