//! Client configuration

use std::time::Duration;

use crate::{ClientError, ClientResult, HotelClient};

/// Default backend address
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client configuration for connecting to the hotel backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:8080")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Read the configuration from the environment
    ///
    /// | var | default |
    /// |-----|---------|
    /// | FRONT_DESK_API_BASE | http://localhost:8080 |
    /// | FRONT_DESK_TIMEOUT_SECS | 30 |
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("FRONT_DESK_API_BASE").unwrap_or_else(|_| DEFAULT_BASE_URL.into());
        let timeout = std::env::var("FRONT_DESK_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        Self::new(base_url).with_timeout(timeout)
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    /// Check that the base URL is an absolute http(s) URL.
    pub fn validate(&self) -> ClientResult<()> {
        let url = reqwest::Url::parse(&self.base_url)
            .map_err(|e| ClientError::Config(format!("invalid base URL {}: {e}", self.base_url)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ClientError::Config(format!(
                "unsupported scheme in base URL: {}",
                url.scheme()
            )));
        }
        if self.timeout == 0 {
            return Err(ClientError::Config("timeout must be at least 1 second".into()));
        }
        Ok(())
    }

    /// Create a hotel client from this configuration
    pub fn build_client(&self) -> ClientResult<HotelClient> {
        HotelClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout, 30);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = ClientConfig::new("http://hotel.local:9000/");
        assert_eq!(config.base_url, "http://hotel.local:9000");
    }

    #[test]
    fn test_validate_rejects_bad_urls() {
        assert!(ClientConfig::new("not a url").validate().is_err());
        assert!(ClientConfig::new("ftp://hotel.local").validate().is_err());
        assert!(
            ClientConfig::default()
                .with_timeout(0)
                .validate()
                .is_err()
        );
    }
}
