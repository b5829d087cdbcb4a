//! Geocoding endpoint family (v1, throttled)
//!
//! Every call passes the shared [`ThrottleGate`] first, keyed by the
//! endpoint path, so bursts of geocoding requests are spaced at 300ms
//! regardless of which service handle issued them.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use ors_core::geocoding::{
    AutocompleteRequest, GeocodeResponse, GeocodeSearchRequest, ReverseGeocodeRequest,
    StructuredGeocodeRequest,
};
use ors_core::ApiVersion;

use crate::client::OrsClient;
use crate::error::OrsError;
use crate::throttle::ThrottleGate;

const SEARCH_PATH: &str = "/geocode/search";
const STRUCTURED_PATH: &str = "/geocode/search/structured";
const REVERSE_PATH: &str = "/geocode/reverse";
const AUTOCOMPLETE_PATH: &str = "/geocode/autocomplete";

/// Forward, structured, reverse, and autocomplete geocoding.
#[derive(Debug, Clone)]
pub struct GeocodingService {
    client: Arc<OrsClient>,
    gate: ThrottleGate,
}

impl GeocodingService {
    const API_VERSION: ApiVersion = ApiVersion::V1;

    /// Build a service with the given throttle gate. The facade passes
    /// the process-wide gate by default; tests and callers running
    /// against a self-hosted instance without the public quota inject
    /// their own.
    pub fn with_gate(client: Arc<OrsClient>, gate: ThrottleGate) -> Self {
        Self { client, gate }
    }

    async fn throttled_get<P, R>(&self, path: &str, params: &P) -> Result<R, OrsError>
    where
        P: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.gate.acquire(path).await;
        self.client.get(Self::API_VERSION, path, params).await
    }

    /// Free-text forward geocoding.
    pub async fn search(&self, request: &GeocodeSearchRequest) -> Result<GeocodeResponse, OrsError> {
        self.throttled_get(SEARCH_PATH, request).await
    }

    /// Forward geocoding with the address split into components.
    pub async fn search_structured(
        &self,
        request: &StructuredGeocodeRequest,
    ) -> Result<GeocodeResponse, OrsError> {
        self.throttled_get(STRUCTURED_PATH, request).await
    }

    /// Nearest addresses and places to a point.
    pub async fn reverse(
        &self,
        request: &ReverseGeocodeRequest,
    ) -> Result<GeocodeResponse, OrsError> {
        self.throttled_get(REVERSE_PATH, request).await
    }

    /// Prefix search for type-ahead interfaces.
    pub async fn autocomplete(
        &self,
        request: &AutocompleteRequest,
    ) -> Result<GeocodeResponse, OrsError> {
        self.throttled_get(AUTOCOMPLETE_PATH, request).await
    }
}
