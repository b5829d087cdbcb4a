//! Structured errors for the request pipeline
//!
//! One variant per failure class: configuration problems caught before
//! any network activity, non-2xx upstream responses, the local timeout,
//! and other transport failures. Nothing is retried internally; callers
//! inspect the variant and decide.

use ors_core::{ConfigError, RateLimitSnapshot};
use thiserror::Error;

/// Errors surfaced by the request pipeline
#[derive(Debug, Error)]
pub enum OrsError {
    #[error(transparent)]
    Configuration(#[from] ConfigError),

    /// Non-2xx upstream response. The message starts with the fixed
    /// per-status description; the body is parsed best-effort.
    #[error("{message}")]
    Status {
        status: u16,
        message: String,
        body: Option<serde_json::Value>,
        rate_limit: Option<RateLimitSnapshot>,
    },

    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Failed to serialize request parameters: {0}")]
    Serialize(#[from] serde_json::Error),

    /// A 2xx response whose body did not match the expected shape.
    #[error("Failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),
}

impl OrsError {
    /// HTTP status of the upstream response, if there was one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            OrsError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Rate-limit snapshot captured on the failing exchange.
    pub fn rate_limit(&self) -> Option<&RateLimitSnapshot> {
        match self {
            OrsError::Status { rate_limit, .. } => rate_limit.as_ref(),
            _ => None,
        }
    }

    /// Requests left in the current window, zero when unknown.
    pub fn remaining_requests(&self) -> u64 {
        self.rate_limit().map(|s| s.remaining).unwrap_or(0)
    }

    pub fn is_bad_request(&self) -> bool {
        self.status_code() == Some(400)
    }

    pub fn is_not_found(&self) -> bool {
        self.status_code() == Some(404)
    }

    pub fn is_method_not_allowed(&self) -> bool {
        self.status_code() == Some(405)
    }

    pub fn is_payload_too_large(&self) -> bool {
        self.status_code() == Some(413)
    }

    pub fn is_rate_limited(&self) -> bool {
        self.status_code() == Some(429)
    }

    pub fn is_server_error(&self) -> bool {
        self.status_code() == Some(500)
    }

    pub fn is_not_implemented(&self) -> bool {
        self.status_code() == Some(501)
    }

    pub fn is_service_unavailable(&self) -> bool {
        self.status_code() == Some(503)
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, OrsError::Timeout { .. })
    }
}

/// Fixed description for a non-2xx status, used as the error message
/// prefix before any API-supplied detail.
pub fn status_description(status: u16) -> String {
    match status {
        400 => "Bad Request: The request is incorrect and cannot be processed".to_string(),
        404 => "Not Found: The requested element could not be found".to_string(),
        405 => "Method Not Allowed: The specified HTTP method is not supported".to_string(),
        413 => "Payload Too Large: The request exceeds the server capacity limit".to_string(),
        500 => "Internal Server Error: An unexpected error occurred on the server".to_string(),
        501 => "Not Implemented: The server does not support the requested functionality".to_string(),
        503 => "Service Unavailable: The server is currently unavailable due to overload or maintenance".to_string(),
        other => format!("HTTP {}: Request failed", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_error(status: u16) -> OrsError {
        OrsError::Status {
            status,
            message: status_description(status),
            body: None,
            rate_limit: None,
        }
    }

    #[test]
    fn test_status_descriptions() {
        assert_eq!(
            status_description(400),
            "Bad Request: The request is incorrect and cannot be processed"
        );
        assert_eq!(
            status_description(503),
            "Service Unavailable: The server is currently unavailable due to overload or maintenance"
        );
        assert_eq!(status_description(429), "HTTP 429: Request failed");
        assert_eq!(status_description(418), "HTTP 418: Request failed");
    }

    #[test]
    fn test_predicates_match_exact_status() {
        assert!(status_error(400).is_bad_request());
        assert!(status_error(404).is_not_found());
        assert!(status_error(405).is_method_not_allowed());
        assert!(status_error(413).is_payload_too_large());
        assert!(status_error(429).is_rate_limited());
        assert!(status_error(500).is_server_error());
        assert!(status_error(501).is_not_implemented());
        assert!(status_error(503).is_service_unavailable());

        assert!(!status_error(400).is_not_found());
        assert!(!status_error(500).is_service_unavailable());
    }

    #[test]
    fn test_timeout_message_contains_duration() {
        let error = OrsError::Timeout { timeout_ms: 30_000 };
        assert_eq!(error.to_string(), "Request timeout after 30000ms");
        assert!(error.is_timeout());
        assert_eq!(error.status_code(), None);
    }

    #[test]
    fn test_serialize_and_decode_messages_name_their_direction() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let error = OrsError::from(json_err);
        assert!(error
            .to_string()
            .starts_with("Failed to serialize request parameters"));

        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let error = OrsError::Decode(json_err);
        assert!(error.to_string().starts_with("Failed to decode response body"));
    }

    #[test]
    fn test_remaining_requests_defaults_to_zero() {
        let error = OrsError::Timeout { timeout_ms: 1 };
        assert_eq!(error.remaining_requests(), 0);

        let error = OrsError::Status {
            status: 429,
            message: status_description(429),
            body: None,
            rate_limit: Some(RateLimitSnapshot::from_raw(40, 7, 1_700_000_000)),
        };
        assert_eq!(error.remaining_requests(), 7);
    }
}
