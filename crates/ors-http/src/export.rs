//! Export endpoint family (v2)

use std::sync::Arc;

use ors_core::common::Profile;
use ors_core::export::{ExportRequest, ExportResponse, ExportTopoJsonResponse};
use ors_core::ApiVersion;

use crate::client::OrsClient;
use crate::error::OrsError;

/// Raw routing-graph extraction for a bounding box.
#[derive(Debug, Clone)]
pub struct ExportService {
    client: Arc<OrsClient>,
}

impl ExportService {
    const API_VERSION: ApiVersion = ApiVersion::V2;

    pub(crate) fn new(client: Arc<OrsClient>) -> Self {
        Self { client }
    }

    fn path(profile: Profile) -> String {
        format!("/export/{}", profile.as_str())
    }

    /// Graph nodes and weighted edges inside the request bbox.
    pub async fn graph(
        &self,
        profile: Profile,
        request: &ExportRequest,
    ) -> Result<ExportResponse, OrsError> {
        self.client
            .post(Self::API_VERSION, &Self::path(profile), request)
            .await
    }

    /// Same as [`Self::graph`] against the explicit `/json` variant.
    pub async fn graph_json(
        &self,
        profile: Profile,
        request: &ExportRequest,
    ) -> Result<ExportResponse, OrsError> {
        let path = format!("{}/json", Self::path(profile));
        self.client.post(Self::API_VERSION, &path, request).await
    }

    /// The graph as a TopoJSON topology.
    pub async fn graph_topojson(
        &self,
        profile: Profile,
        request: &ExportRequest,
    ) -> Result<ExportTopoJsonResponse, OrsError> {
        let path = format!("{}/topojson", Self::path(profile));
        self.client.post(Self::API_VERSION, &path, request).await
    }
}
