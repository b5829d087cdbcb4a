//! Elevation endpoint family (v1)

use std::sync::Arc;

use ors_core::elevation::{
    ElevationLineRequest, ElevationLineResult, ElevationPointRequest, ElevationPointResult,
};
use ors_core::ApiVersion;

use crate::client::OrsClient;
use crate::error::OrsError;

const POINT_PATH: &str = "/elevation/point";
const LINE_PATH: &str = "/elevation/line";

/// Terrain elevation for points and line geometries.
///
/// The response shape depends on the requested `format_out`, so both
/// operations return an untagged result enum covering the GeoJSON and
/// plain encodings.
#[derive(Debug, Clone)]
pub struct ElevationService {
    client: Arc<OrsClient>,
}

impl ElevationService {
    const API_VERSION: ApiVersion = ApiVersion::V1;

    pub(crate) fn new(client: Arc<OrsClient>) -> Self {
        Self { client }
    }

    /// Elevation of a single point.
    pub async fn point(
        &self,
        request: &ElevationPointRequest,
    ) -> Result<ElevationPointResult, OrsError> {
        self.client
            .post(Self::API_VERSION, POINT_PATH, request)
            .await
    }

    /// Elevation along a line geometry.
    pub async fn line(
        &self,
        request: &ElevationLineRequest,
    ) -> Result<ElevationLineResult, OrsError> {
        self.client.post(Self::API_VERSION, LINE_PATH, request).await
    }
}
