//! Points-of-interest endpoint family (v1)
//!
//! The upstream exposes one POST endpoint that multiplexes three
//! operations through a `request` discriminator in the body.

use std::sync::Arc;

use serde::Serialize;

use ors_core::pois::{PoiCategoriesResponse, PoiQuery, PoiRequestKind, PoiResponse, PoiStatsResponse};
use ors_core::ApiVersion;

use crate::client::OrsClient;
use crate::error::OrsError;

const POIS_PATH: &str = "/pois";

#[derive(Serialize)]
struct PoiBody<'a> {
    request: PoiRequestKind,
    #[serde(flatten)]
    query: &'a PoiQuery,
}

/// POI search, aggregate statistics, and the category taxonomy.
#[derive(Debug, Clone)]
pub struct PoisService {
    client: Arc<OrsClient>,
}

impl PoisService {
    const API_VERSION: ApiVersion = ApiVersion::V1;

    pub(crate) fn new(client: Arc<OrsClient>) -> Self {
        Self { client }
    }

    /// POIs within the query geometry as a GeoJSON feature collection.
    pub async fn search(&self, query: &PoiQuery) -> Result<PoiResponse, OrsError> {
        let body = PoiBody {
            request: PoiRequestKind::Pois,
            query,
        };
        self.client.post(Self::API_VERSION, POIS_PATH, &body).await
    }

    /// Counts per category group within the query geometry.
    pub async fn stats(&self, query: &PoiQuery) -> Result<PoiStatsResponse, OrsError> {
        let body = PoiBody {
            request: PoiRequestKind::Stats,
            query,
        };
        self.client.post(Self::API_VERSION, POIS_PATH, &body).await
    }

    /// The full category taxonomy. Takes no geometry.
    pub async fn categories(&self) -> Result<PoiCategoriesResponse, OrsError> {
        let body = PoiBody {
            request: PoiRequestKind::List,
            query: &PoiQuery::default(),
        };
        self.client.post(Self::API_VERSION, POIS_PATH, &body).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_body_carries_discriminator_and_flattened_query() {
        let query = PoiQuery::default();
        let body = PoiBody {
            request: PoiRequestKind::Stats,
            query: &query,
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value, json!({"request": "stats"}));
    }
}
