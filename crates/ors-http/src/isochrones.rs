//! Isochrones endpoint family (v2)

use std::sync::Arc;

use ors_core::common::Profile;
use ors_core::isochrones::{IsochroneRequest, IsochroneResponse};
use ors_core::ApiVersion;

use crate::client::{geojson_accept, OrsClient};
use crate::error::OrsError;

/// Reachability areas around one or more locations.
#[derive(Debug, Clone)]
pub struct IsochronesService {
    client: Arc<OrsClient>,
}

impl IsochronesService {
    const API_VERSION: ApiVersion = ApiVersion::V2;

    pub(crate) fn new(client: Arc<OrsClient>) -> Self {
        Self { client }
    }

    /// Compute isochrone polygons as a GeoJSON feature collection.
    pub async fn calculate(
        &self,
        profile: Profile,
        request: &IsochroneRequest,
    ) -> Result<IsochroneResponse, OrsError> {
        let path = format!("/isochrones/{}", profile.as_str());
        self.client
            .post_with_headers(Self::API_VERSION, &path, request, geojson_accept())
            .await
    }
}
