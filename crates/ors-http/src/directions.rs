//! Directions endpoint family (v2)

use std::sync::Arc;

use ors_core::common::Profile;
use ors_core::directions::{
    DirectionsGeoJsonResponse, DirectionsGetRequest, DirectionsPostRequest, DirectionsResponse,
};
use ors_core::ApiVersion;

use crate::client::{geojson_accept, OrsClient};
use crate::error::OrsError;

/// Route calculation between waypoints.
///
/// The GET operations take a simple start/end pair; the POST operations
/// accept the full request body with routing options, extra info, and
/// alternative routes.
#[derive(Debug, Clone)]
pub struct DirectionsService {
    client: Arc<OrsClient>,
}

impl DirectionsService {
    const API_VERSION: ApiVersion = ApiVersion::V2;

    pub(crate) fn new(client: Arc<OrsClient>) -> Self {
        Self { client }
    }

    fn path(profile: Profile) -> String {
        format!("/directions/{}", profile.as_str())
    }

    /// Simple two-point route as a GeoJSON feature collection.
    pub async fn route(
        &self,
        profile: Profile,
        request: &DirectionsGetRequest,
    ) -> Result<DirectionsGeoJsonResponse, OrsError> {
        self.client
            .get(Self::API_VERSION, &Self::path(profile), request)
            .await
    }

    /// Simple two-point route against the explicit `/geojson` variant.
    ///
    /// Upstream serves the same feature collection as [`Self::route`];
    /// this exists for callers that pin the response format in the URL.
    pub async fn route_geojson(
        &self,
        profile: Profile,
        request: &DirectionsGetRequest,
    ) -> Result<DirectionsGeoJsonResponse, OrsError> {
        let path = format!("{}/geojson", Self::path(profile));
        self.client.get(Self::API_VERSION, &path, request).await
    }

    /// Full route calculation with encoded-polyline geometry.
    pub async fn calculate(
        &self,
        profile: Profile,
        request: &DirectionsPostRequest,
    ) -> Result<DirectionsResponse, OrsError> {
        self.client
            .post(Self::API_VERSION, &Self::path(profile), request)
            .await
    }

    /// Full route calculation as a GeoJSON feature collection.
    pub async fn calculate_geojson(
        &self,
        profile: Profile,
        request: &DirectionsPostRequest,
    ) -> Result<DirectionsGeoJsonResponse, OrsError> {
        let path = format!("{}/geojson", Self::path(profile));
        self.client
            .post_with_headers(Self::API_VERSION, &path, request, geojson_accept())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_uses_profile_segment() {
        assert_eq!(
            DirectionsService::path(Profile::CyclingRegular),
            "/directions/cycling-regular"
        );
    }
}
