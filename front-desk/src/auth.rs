//! Session gate
//!
//! The backend keeps the session in a cookie; the client only knows whether
//! a protected call goes through.

use std::sync::Arc;

use desk_client::HotelApi;

use crate::DeskResult;
use crate::forms::UserForm;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthStatus {
    Authenticated,
    LoginRequired,
}

pub struct AuthGate {
    api: Arc<dyn HotelApi>,
}

impl AuthGate {
    pub fn new(api: Arc<dyn HotelApi>) -> Self {
        Self { api }
    }

    /// Any failure of the probe call means the operator has to log in.
    pub async fn probe(&self) -> AuthStatus {
        match self.api.probe_session().await {
            Ok(()) => AuthStatus::Authenticated,
            Err(e) => {
                tracing::warn!(error = %e, "session probe failed");
                AuthStatus::LoginRequired
            }
        }
    }

    pub async fn login(&self, form: &UserForm) -> DeskResult<()> {
        let credentials = form.credentials()?;
        self.api.login(&credentials).await?;
        tracing::info!(user = %credentials.id, "logged in");
        Ok(())
    }

    pub async fn logout(&self) -> DeskResult<()> {
        self.api.logout().await?;
        tracing::info!("logged out");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DeskError;
    use crate::testing::FakeHotel;

    fn form(password: &str) -> UserForm {
        UserForm {
            id: "front01".into(),
            password: password.into(),
        }
    }

    #[tokio::test]
    async fn test_probe_follows_session() {
        let fake = Arc::new(FakeHotel::new());
        let gate = AuthGate::new(fake.clone());
        assert_eq!(gate.probe().await, AuthStatus::Authenticated);

        gate.logout().await.unwrap();
        assert_eq!(gate.probe().await, AuthStatus::LoginRequired);

        gate.login(&form("secret")).await.unwrap();
        assert_eq!(gate.probe().await, AuthStatus::Authenticated);
    }

    #[tokio::test]
    async fn test_probe_transport_failure_requires_login() {
        let fake = Arc::new(FakeHotel::new());
        fake.fail_next(503, "");
        let gate = AuthGate::new(fake.clone());
        assert_eq!(gate.probe().await, AuthStatus::LoginRequired);
    }

    #[tokio::test]
    async fn test_bad_password() {
        let fake = Arc::new(FakeHotel::new());
        let gate = AuthGate::new(fake.clone());
        let err = gate.login(&form("nope")).await.unwrap_err();
        assert!(matches!(err, DeskError::Client(ref e) if e.is_unauthorized()));
    }

    #[tokio::test]
    async fn test_empty_form_sends_nothing() {
        let fake = Arc::new(FakeHotel::new());
        let gate = AuthGate::new(fake.clone());
        let err = gate.login(&form("")).await.unwrap_err();
        assert!(err.field_errors().is_some());
        assert!(fake.calls().is_empty());
    }

    #[tokio::test]
    async fn test_logout_ends_session_even_on_failure() {
        let fake = Arc::new(FakeHotel::new());
        fake.fail_next(500, "");
        let gate = AuthGate::new(fake.clone());
        assert!(gate.logout().await.is_err());
        assert_eq!(gate.probe().await, AuthStatus::LoginRequired);
    }
}
