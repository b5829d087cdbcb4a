//! Request and response types for the POI family
//!
//! The single `/pois` endpoint multiplexes three operations through a
//! `request` discriminator field: `pois`, `stats` and `list`.

use crate::common::{Coordinate, PointGeometry};
use serde::{Deserialize, Serialize};

/// Discriminator selecting the `/pois` operation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PoiRequestKind {
    Pois,
    Stats,
    List,
}

/// Search area: a bounding box, a point with buffer, or both.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PoiGeometry {
    /// `[[min_lon, min_lat], [max_lon, max_lat]]`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bbox: Option<[Coordinate; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geojson: Option<PointGeometry>,
    /// Buffer around the geometry in meters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buffer: Option<f64>,
}

/// Category and attribute filters. Wheelchair and fee accept mixed
/// boolean/string values upstream, so they stay open JSON values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PoiFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_group_ids: Option<Vec<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_ids: Option<Vec<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wheelchair: Option<Vec<serde_json::Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smoking: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee: Option<Vec<serde_json::Value>>,
}

/// Result ordering.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PoiSortBy {
    Distance,
    Category,
}

/// POI query without the operation discriminator; the service adds it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PoiQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geometry: Option<PoiGeometry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<PoiFilters>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sortby: Option<PoiSortBy>,
}

/// Properties of one point of interest.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PoiProperties {
    pub osm_id: u64,
    pub osm_type: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    /// Category ids mapped to name/group records, kept open-shaped.
    #[serde(default)]
    pub category_ids: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub osm_tags: Option<std::collections::HashMap<String, String>>,
}

/// One point of interest.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PoiFeature {
    #[serde(rename = "type")]
    pub feature_type: String,
    pub geometry: PointGeometry,
    pub properties: PoiProperties,
}

/// Attribution block of the POI responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PoiInformation {
    pub attribution: String,
    pub version: String,
    pub timestamp: i64,
    #[serde(default)]
    pub query: serde_json::Value,
}

/// Response of the `pois` operation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PoiResponse {
    #[serde(rename = "type")]
    pub collection_type: String,
    pub features: Vec<PoiFeature>,
    pub information: PoiInformation,
}

/// Response of the `stats` operation. The `places` block mixes a
/// `total_count` number with dynamically named category groups.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PoiStatsResponse {
    pub places: serde_json::Value,
    pub information: PoiInformation,
}

/// Response of the `list` operation: category groups keyed by name.
pub type PoiCategoriesResponse = serde_json::Map<String, serde_json::Value>;
