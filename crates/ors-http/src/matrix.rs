//! Matrix endpoint family (v2)

use std::sync::Arc;

use ors_core::common::Profile;
use ors_core::matrix::{MatrixRequest, MatrixResponse};
use ors_core::ApiVersion;

use crate::client::OrsClient;
use crate::error::OrsError;

/// Many-to-many duration and distance matrices.
#[derive(Debug, Clone)]
pub struct MatrixService {
    client: Arc<OrsClient>,
}

impl MatrixService {
    const API_VERSION: ApiVersion = ApiVersion::V2;

    pub(crate) fn new(client: Arc<OrsClient>) -> Self {
        Self { client }
    }

    /// Compute the matrix for the requested sources and destinations.
    pub async fn calculate(
        &self,
        profile: Profile,
        request: &MatrixRequest,
    ) -> Result<MatrixResponse, OrsError> {
        let path = format!("/matrix/{}", profile.as_str());
        self.client.post(Self::API_VERSION, &path, request).await
    }
}
