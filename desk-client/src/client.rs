//! `HotelApi` over HTTP

use async_trait::async_trait;
use serde::Serialize;
use shared::GuestSearchRequest;
use shared::models::{
    Booking, BookingCreate, Guest, GuestDetail, GuestMatch, GuestMatchQuery, GuestRegistration,
    ReservationUpsert, UserCredentials,
};

use crate::http::{ApiPayload, NetworkHttpClient};
use crate::{ClientConfig, ClientResult, GuestScope, HotelApi};

/// `?id=..&name=..` of the toggle and check-in/out endpoints
#[derive(Serialize)]
struct IdName<'a> {
    id: &'a str,
    name: &'a str,
}

/// `PUT /guest/update` body; the soft-delete flag has its own endpoint
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GuestUpdate<'a> {
    id: &'a str,
    name: &'a str,
    kana_name: &'a str,
    gender: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    age: Option<u32>,
    region: &'a str,
    email: &'a str,
    phone: &'a str,
}

impl<'a> From<&'a Guest> for GuestUpdate<'a> {
    fn from(g: &'a Guest) -> Self {
        Self {
            id: &g.id,
            name: &g.name,
            kana_name: &g.kana_name,
            gender: &g.gender,
            age: g.age,
            region: &g.region,
            email: &g.email,
            phone: &g.phone,
        }
    }
}

fn confirmation(payload: ApiPayload, fallback: &str) -> String {
    let message = payload.message();
    if message.is_empty() {
        fallback.to_string()
    } else {
        message
    }
}

/// Hotel backend client
#[derive(Debug)]
pub struct HotelClient {
    http: NetworkHttpClient,
}

impl HotelClient {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        Ok(Self {
            http: NetworkHttpClient::new(config)?,
        })
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    /// Underlying transport
    pub fn http(&self) -> &NetworkHttpClient {
        &self.http
    }
}

#[async_trait]
impl HotelApi for HotelClient {
    async fn guests(&self, scope: GuestScope) -> ClientResult<Vec<GuestDetail>> {
        self.http.get_json(scope.path()).await
    }

    async fn search_guests(&self, request: &GuestSearchRequest) -> ClientResult<Vec<GuestDetail>> {
        self.http
            .post_json("/guest/search", request)
            .await?
            .into_json()
    }

    async fn match_guest(&self, query: &GuestMatchQuery) -> ClientResult<GuestMatch> {
        match self.http.post_json("/guest/match", query).await? {
            ApiPayload::Empty => Ok(GuestMatch::default()),
            payload => payload.into_json(),
        }
    }

    async fn update_guest(&self, guest: &Guest) -> ClientResult<String> {
        let payload = self
            .http
            .put_json("/guest/update", &GuestUpdate::from(guest))
            .await?;
        tracing::info!(guest_id = %guest.id, "guest updated");
        Ok(confirmation(payload, "Guest updated"))
    }

    async fn toggle_guest_deleted(&self, id: &str, name: &str) -> ClientResult<String> {
        let payload = self
            .http
            .put_query("/guest/deleted", &IdName { id, name })
            .await?;
        tracing::info!(guest_id = id, "guest deleted flag toggled");
        Ok(confirmation(payload, "Guest status changed"))
    }

    async fn register_guest(&self, registration: &GuestRegistration) -> ClientResult<String> {
        let payload = self.http.put_json("/guest/register", registration).await?;
        tracing::info!(booking_id = %registration.booking_id, "guest registered");
        Ok(confirmation(payload, "Guest registered"))
    }

    async fn check_in(&self, reservation_id: &str, guest_name: &str) -> ClientResult<String> {
        let payload = self
            .http
            .put_query(
                "/guest/checkIn",
                &IdName {
                    id: reservation_id,
                    name: guest_name,
                },
            )
            .await?;
        tracing::info!(reservation_id, "checked in");
        Ok(confirmation(payload, "Checked in"))
    }

    async fn check_out(&self, reservation_id: &str, guest_name: &str) -> ClientResult<String> {
        let payload = self
            .http
            .put_query(
                "/guest/checkOut",
                &IdName {
                    id: reservation_id,
                    name: guest_name,
                },
            )
            .await?;
        tracing::info!(reservation_id, "checked out");
        Ok(confirmation(payload, "Checked out"))
    }

    async fn bookings(&self) -> ClientResult<Vec<Booking>> {
        self.http.get_json("/bookings").await
    }

    async fn update_booking(&self, booking: &Booking) -> ClientResult<String> {
        let payload = self.http.put_json("/booking/update", booking).await?;
        tracing::info!(booking_id = %booking.id, "booking updated");
        Ok(confirmation(payload, "Booking updated"))
    }

    async fn register_booking(&self, booking: &BookingCreate) -> ClientResult<String> {
        let payload = self.http.put_json("/booking/register", booking).await?;
        tracing::info!(name = %booking.name, "booking registered");
        Ok(confirmation(payload, "Booking registered"))
    }

    async fn toggle_booking_available(&self, id: &str, name: &str) -> ClientResult<String> {
        let payload = self
            .http
            .put_query("/booking/deleted", &IdName { id, name })
            .await?;
        tracing::info!(booking_id = id, "booking availability toggled");
        Ok(confirmation(payload, "Booking availability changed"))
    }

    async fn update_reservation(&self, reservation: &ReservationUpsert) -> ClientResult<String> {
        let payload = self
            .http
            .put_json("/reservation/update", reservation)
            .await?;
        tracing::info!(reservation_id = ?reservation.id, "reservation updated");
        Ok(confirmation(payload, "Reservation updated"))
    }

    async fn register_reservation(
        &self,
        reservation: &ReservationUpsert,
    ) -> ClientResult<String> {
        let payload = self
            .http
            .post_json("/reservation/register", reservation)
            .await?;
        tracing::info!(guest_id = %reservation.guest_id, "reservation registered");
        Ok(confirmation(payload, "Reservation registered"))
    }

    async fn login(&self, credentials: &UserCredentials) -> ClientResult<()> {
        self.http.post_form("/login", credentials).await?;
        tracing::info!(user = %credentials.id, "logged in");
        Ok(())
    }

    async fn logout(&self) -> ClientResult<()> {
        let result = self.http.post_empty("/user/logout").await;
        // Local cookies go regardless of what the server said
        self.http.reset_session()?;
        result?;
        tracing::info!("logged out");
        Ok(())
    }

    async fn register_user(&self, credentials: &UserCredentials) -> ClientResult<String> {
        let payload = self.http.put_json("/user/register", credentials).await?;
        tracing::info!(user = %credentials.id, "user registered");
        Ok(confirmation(payload, "User registered"))
    }

    async fn probe_session(&self) -> ClientResult<()> {
        self.http.get(GuestScope::Staying.path()).await.map(|_| ())
    }
}
