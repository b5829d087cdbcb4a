//! Snap endpoint family (v2)

use std::sync::Arc;

use ors_core::common::Profile;
use ors_core::snap::{SnapGeoJsonResponse, SnapRequest, SnapResponse};
use ors_core::ApiVersion;

use crate::client::{geojson_accept, OrsClient};
use crate::error::OrsError;

/// Snapping of coordinates onto the routing graph.
#[derive(Debug, Clone)]
pub struct SnapService {
    client: Arc<OrsClient>,
}

impl SnapService {
    const API_VERSION: ApiVersion = ApiVersion::V2;

    pub(crate) fn new(client: Arc<OrsClient>) -> Self {
        Self { client }
    }

    fn path(profile: Profile) -> String {
        format!("/snap/{}", profile.as_str())
    }

    /// Snap the given locations. Inputs with no graph edge within the
    /// search radius come back as `None` in order.
    pub async fn locations(
        &self,
        profile: Profile,
        request: &SnapRequest,
    ) -> Result<SnapResponse, OrsError> {
        self.client
            .post(Self::API_VERSION, &Self::path(profile), request)
            .await
    }

    /// Same as [`Self::locations`] against the explicit `/json` variant.
    pub async fn locations_json(
        &self,
        profile: Profile,
        request: &SnapRequest,
    ) -> Result<SnapResponse, OrsError> {
        let path = format!("{}/json", Self::path(profile));
        self.client.post(Self::API_VERSION, &path, request).await
    }

    /// Snapped locations as a GeoJSON feature collection. Unsnappable
    /// inputs are absent rather than null here; `source_id` in the
    /// feature properties maps back to the input index.
    pub async fn locations_geojson(
        &self,
        profile: Profile,
        request: &SnapRequest,
    ) -> Result<SnapGeoJsonResponse, OrsError> {
        let path = format!("{}/geojson", Self::path(profile));
        self.client
            .post_with_headers(Self::API_VERSION, &path, request, geojson_accept())
            .await
    }
}
