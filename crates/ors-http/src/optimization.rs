//! Optimization endpoint family (v1)

use std::sync::Arc;

use ors_core::optimization::{OptimizationRequest, OptimizationResponse};
use ors_core::ApiVersion;

use crate::client::OrsClient;
use crate::error::OrsError;

const OPTIMIZATION_PATH: &str = "/optimization";

/// Vehicle routing problem solver (VROOM behind the API).
#[derive(Debug, Clone)]
pub struct OptimizationService {
    client: Arc<OrsClient>,
}

impl OptimizationService {
    const API_VERSION: ApiVersion = ApiVersion::V1;

    pub(crate) fn new(client: Arc<OrsClient>) -> Self {
        Self { client }
    }

    /// Solve the given jobs/shipments/vehicles problem.
    pub async fn solve(
        &self,
        request: &OptimizationRequest,
    ) -> Result<OptimizationResponse, OrsError> {
        self.client
            .post(Self::API_VERSION, OPTIMIZATION_PATH, request)
            .await
    }
}
