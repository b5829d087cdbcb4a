//! Reqwest-based openrouteservice request pipeline
//!
//! One `OrsClient` carries the validated configuration, the base header
//! set, and the most recent rate-limit snapshot. The endpoint services
//! share a single client via `Arc` and go through `get`/`post` here, so
//! auth, timeout enforcement, rate-limit capture, and error shaping
//! behave identically on every endpoint.

use std::sync::Mutex;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};

use ors_core::{ApiVersion, ClientConfig, ConfigError, RateLimitSnapshot};

use crate::error::{status_description, OrsError};
use crate::params::to_query_pairs;

const RATE_LIMIT_LIMIT: &str = "x-ratelimit-limit";
const RATE_LIMIT_REMAINING: &str = "x-ratelimit-remaining";
const RATE_LIMIT_RESET: &str = "x-ratelimit-reset";

/// Shared HTTP pipeline for all openrouteservice endpoints.
///
/// Construction validates the configuration, so a client in hand always
/// has a usable API key and a positive timeout.
pub struct OrsClient {
    http: Client,
    config: ClientConfig,
    base_headers: HeaderMap,
    rate_limit: Mutex<Option<RateLimitSnapshot>>,
}

impl OrsClient {
    /// Build a client from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns `OrsError::Configuration` when the configuration fails
    /// validation or a configured header name or value is malformed.
    pub fn new(config: ClientConfig) -> Result<Self, OrsError> {
        config.validate()?;

        let mut base_headers = HeaderMap::new();
        base_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let auth = HeaderValue::from_str(&config.api_key)
            .map_err(|_| ConfigError::InvalidHeader("authorization".to_string()))?;
        base_headers.insert(AUTHORIZATION, auth);
        for (name, value) in &config.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| ConfigError::InvalidHeader(name.clone()))?;
            let value = HeaderValue::from_str(value)
                .map_err(|_| ConfigError::InvalidHeader(name.to_string()))?;
            base_headers.insert(name, value);
        }

        Ok(Self {
            http: Client::new(),
            config,
            base_headers,
            rate_limit: Mutex::new(None),
        })
    }

    /// The configured base URL, without any version prefix.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// The most recent rate-limit snapshot reported by the server.
    ///
    /// `None` until a response has carried a nonzero
    /// `x-ratelimit-limit` header.
    pub fn rate_limit(&self) -> Option<RateLimitSnapshot> {
        self.rate_limit
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    fn url(&self, version: ApiVersion, path: &str) -> String {
        format!("{}{}{}", self.config.base_url, version.prefix(), path)
    }

    /// Issue a GET request with the given parameters as query pairs.
    pub async fn get<P, R>(
        &self,
        version: ApiVersion,
        path: &str,
        params: &P,
    ) -> Result<R, OrsError>
    where
        P: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let pairs = to_query_pairs(params)?;
        let builder = self
            .http
            .get(self.url(version, path))
            .query(&pairs)
            .headers(self.base_headers.clone());
        self.execute(builder).await
    }

    /// Issue a POST request with a JSON body.
    pub async fn post<B, R>(&self, version: ApiVersion, path: &str, body: &B) -> Result<R, OrsError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.post_with_headers(version, path, body, HeaderMap::new())
            .await
    }

    /// Issue a POST request with a JSON body and per-call header
    /// overrides.
    ///
    /// Overrides replace base headers of the same name rather than
    /// appending a second value, which is how the GeoJSON endpoints
    /// swap the `Accept` header.
    pub async fn post_with_headers<B, R>(
        &self,
        version: ApiVersion,
        path: &str,
        body: &B,
        overrides: HeaderMap,
    ) -> Result<R, OrsError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let mut headers = self.base_headers.clone();
        for (name, value) in overrides.iter() {
            headers.insert(name.clone(), value.clone());
        }
        let builder = self
            .http
            .post(self.url(version, path))
            .headers(headers)
            .json(body);
        self.execute(builder).await
    }

    async fn execute<R>(&self, builder: RequestBuilder) -> Result<R, OrsError>
    where
        R: DeserializeOwned,
    {
        let timeout_ms = self.config.timeout_ms;
        let response = tokio::time::timeout(Duration::from_millis(timeout_ms), builder.send())
            .await
            .map_err(|_| OrsError::Timeout { timeout_ms })??;

        let snapshot = snapshot_from_headers(response.headers());
        if snapshot.is_reported() {
            *self.rate_limit.lock().unwrap_or_else(|e| e.into_inner()) = Some(snapshot.clone());
        }

        if !response.status().is_success() {
            return Err(self.status_error(response, snapshot).await);
        }

        let text = response.text().await?;
        if text.is_empty() {
            // Matches endpoints that reply 200 with no body.
            return serde_json::from_value(Value::Null).map_err(OrsError::Decode);
        }
        serde_json::from_str(&text).map_err(OrsError::Decode)
    }

    async fn status_error(&self, response: Response, snapshot: RateLimitSnapshot) -> OrsError {
        let status = response.status();
        let text = response.text().await.unwrap_or_default();

        let body = if text.is_empty() {
            None
        } else {
            match serde_json::from_str::<Value>(&text) {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(
                        status = status.as_u16(),
                        "non-JSON error body from openrouteservice"
                    );
                    Some(json!({ "rawResponse": text }))
                }
            }
        };

        let mut message = status_description(status.as_u16());
        if let Some(detail) = body.as_ref().and_then(api_error_message) {
            message.push_str(" - ");
            message.push_str(&detail);
        }

        OrsError::Status {
            status: status.as_u16(),
            message,
            body,
            rate_limit: Some(snapshot),
        }
    }
}

impl std::fmt::Debug for OrsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrsClient")
            .field("base_url", &self.config.base_url)
            .field("timeout_ms", &self.config.timeout_ms)
            .finish_non_exhaustive()
    }
}

/// Pull the server's detail message out of an error body, if present.
///
/// The API reports either `{"error": {"message": "..."}}` or
/// `{"error": "..."}` depending on the endpoint.
fn api_error_message(body: &Value) -> Option<String> {
    match body.get("error")? {
        Value::String(s) => Some(s.clone()),
        Value::Object(obj) => obj
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string),
        _ => None,
    }
}

fn snapshot_from_headers(headers: &HeaderMap) -> RateLimitSnapshot {
    RateLimitSnapshot::from_raw(
        header_u64(headers, RATE_LIMIT_LIMIT),
        header_u64(headers, RATE_LIMIT_REMAINING),
        header_i64(headers, RATE_LIMIT_RESET),
    )
}

// Absent or unparseable headers read as zero. The server has sent
// malformed values before and a routing call should not fail over its
// rate-limit metadata.
fn header_u64(headers: &HeaderMap, name: &str) -> u64 {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(0)
}

fn header_i64(headers: &HeaderMap, name: &str) -> i64 {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(0)
}

/// Header overrides for endpoints that return GeoJSON bodies.
pub(crate) fn geojson_accept() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/geo+json"));
    headers
}
