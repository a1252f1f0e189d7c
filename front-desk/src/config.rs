//! Front-desk configuration
//!
//! Loaded from the environment (after `.env`), then overridden by CLI flags.

use std::path::PathBuf;

use desk_client::ClientConfig;
use shared::models::UserCredentials;

use crate::{DeskError, DeskResult};

pub const DEFAULT_PREFS_FILE: &str = "front-desk-prefs.json";

/// Front-desk configuration
///
/// | var | default |
/// |-----|---------|
/// | FRONT_DESK_API_BASE | http://localhost:8080 |
/// | FRONT_DESK_TIMEOUT_SECS | 30 |
/// | FRONT_DESK_LOG_DIR | (stdout only) |
/// | FRONT_DESK_PREFS | ./front-desk-prefs.json |
/// | FRONT_DESK_USER | (no auto login) |
/// | FRONT_DESK_PASSWORD | |
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub client: ClientConfig,
    /// Directory for the daily-rolling log file
    pub log_dir: Option<PathBuf>,
    /// UI preferences file
    pub prefs_path: PathBuf,
    /// Operator login, used before the auth probe when set
    pub credentials: Option<UserCredentials>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let log_dir = std::env::var("FRONT_DESK_LOG_DIR")
            .ok()
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);
        let prefs_path = std::env::var("FRONT_DESK_PREFS")
            .ok()
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PREFS_FILE));
        let credentials = match (
            std::env::var("FRONT_DESK_USER"),
            std::env::var("FRONT_DESK_PASSWORD"),
        ) {
            (Ok(id), Ok(password)) if !id.is_empty() => Some(UserCredentials { id, password }),
            _ => None,
        };

        Self {
            client: ClientConfig::from_env(),
            log_dir,
            prefs_path,
            credentials,
        }
    }

    pub fn validate(&self) -> DeskResult<()> {
        self.client
            .validate()
            .map_err(|e| DeskError::Config(e.to_string()))?;
        if let Some(creds) = &self.credentials
            && creds.password.is_empty()
        {
            return Err(DeskError::Config(format!(
                "FRONT_DESK_PASSWORD is empty for user {}",
                creds.id
            )));
        }
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            client: ClientConfig::default(),
            log_dir: None,
            prefs_path: PathBuf::from(DEFAULT_PREFS_FILE),
            credentials: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.client.base_url, "http://localhost:8080");
        assert_eq!(config.prefs_path, PathBuf::from(DEFAULT_PREFS_FILE));
    }

    #[test]
    fn test_empty_password_rejected() {
        let config = AppConfig {
            credentials: Some(UserCredentials {
                id: "front01".into(),
                password: String::new(),
            }),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(DeskError::Config(_))));
    }
}
