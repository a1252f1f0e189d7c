//! HTTP transport
//!
//! Thin wrapper over `reqwest` with a cookie store. Every request goes to
//! `{base_url}/{path}` and the body is decoded by content type: JSON bodies
//! become [`ApiPayload::Json`], anything else [`ApiPayload::Text`].

use std::time::Duration;

use parking_lot::RwLock;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{ClientConfig, ClientError, ClientResult};

/// Decoded 2xx response body
#[derive(Debug, Clone, PartialEq)]
pub enum ApiPayload {
    Json(Value),
    Text(String),
    Empty,
}

impl ApiPayload {
    /// Deserialize a JSON payload into `T`.
    pub fn into_json<T: DeserializeOwned>(self) -> ClientResult<T> {
        match self {
            Self::Json(value) => Ok(serde_json::from_value(value)?),
            Self::Text(text) => serde_json::from_str(&text).map_err(|_| {
                ClientError::InvalidResponse(format!("expected JSON, got text: {text}"))
            }),
            Self::Empty => Err(ClientError::InvalidResponse("empty response body".into())),
        }
    }

    /// Confirmation text of a mutation: the raw text, a JSON string or the
    /// `message` field of a JSON object. Empty when none of those exist.
    pub fn message(&self) -> String {
        match self {
            Self::Text(text) => text.trim().to_string(),
            Self::Json(Value::String(text)) => text.clone(),
            Self::Json(value) => value
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            Self::Empty => String::new(),
        }
    }
}

/// Network HTTP client holding the session cookie
///
/// The inner `reqwest::Client` sits behind a lock so [`reset_session`]
/// can swap it for one with an empty cookie jar.
///
/// [`reset_session`]: NetworkHttpClient::reset_session
#[derive(Debug)]
pub struct NetworkHttpClient {
    client: RwLock<Client>,
    base_url: String,
    timeout: Duration,
}

impl NetworkHttpClient {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        config.validate()?;
        let timeout = config.timeout_duration();
        Ok(Self {
            client: RwLock::new(build_client(timeout)?),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let client = self.client.read().clone();
        client.request(method, self.url(path))
    }

    pub async fn get(&self, path: &str) -> ClientResult<ApiPayload> {
        self.send(Method::GET, path, self.request(Method::GET, path))
            .await
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.get(path).await?.into_json()
    }

    pub async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<ApiPayload> {
        let req = self.request(Method::POST, path).json(body);
        self.send(Method::POST, path, req).await
    }

    pub async fn put_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<ApiPayload> {
        let req = self.request(Method::PUT, path).json(body);
        self.send(Method::PUT, path, req).await
    }

    /// `PUT` with query parameters and no body
    pub async fn put_query<Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> ClientResult<ApiPayload> {
        let req = self.request(Method::PUT, path).query(query);
        self.send(Method::PUT, path, req).await
    }

    /// `POST` an `application/x-www-form-urlencoded` body
    pub async fn post_form<F: Serialize + ?Sized>(
        &self,
        path: &str,
        form: &F,
    ) -> ClientResult<ApiPayload> {
        let req = self.request(Method::POST, path).form(form);
        self.send(Method::POST, path, req).await
    }

    pub async fn post_empty(&self, path: &str) -> ClientResult<ApiPayload> {
        self.send(Method::POST, path, self.request(Method::POST, path))
            .await
    }

    /// Drop the cookie jar by swapping in a fresh client.
    pub fn reset_session(&self) -> ClientResult<()> {
        let fresh = build_client(self.timeout)?;
        *self.client.write() = fresh;
        tracing::debug!("session cookies cleared");
        Ok(())
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        req: RequestBuilder,
    ) -> ClientResult<ApiPayload> {
        tracing::debug!(%method, path, "request");
        let response = req.send().await.inspect_err(|e| {
            tracing::warn!(%method, path, error = %e, "request failed");
        })?;
        let result = handle_response(response).await;
        if let Err(e) = &result {
            tracing::warn!(%method, path, status = ?e.status(), "request rejected");
        }
        result
    }
}

fn build_client(timeout: Duration) -> ClientResult<Client> {
    Ok(Client::builder()
        .timeout(timeout)
        .cookie_store(true)
        .build()?)
}

async fn handle_response(response: reqwest::Response) -> ClientResult<ApiPayload> {
    let status = response.status();
    let is_json = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.contains("json"));
    let text = response.text().await?;

    if !status.is_success() {
        return Err(ClientError::from_status(status.as_u16(), &text));
    }

    if text.trim().is_empty() {
        return Ok(ApiPayload::Empty);
    }
    if is_json {
        return Ok(ApiPayload::Json(serde_json::from_str(&text)?));
    }
    Ok(ApiPayload::Text(text))
}
