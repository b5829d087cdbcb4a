//! Request and response types for the geocoding family
//!
//! Geocoding requests are flattened into GET query parameters, so the
//! dotted upstream names (`boundary.country`, `focus.point`, …) are kept
//! as serde renames.

use crate::common::{BoundingBox, Coordinate, PointGeometry};
use serde::{Deserialize, Serialize};

/// Pelias layer filter.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GeocodeLayer {
    Venue,
    Address,
    Street,
    Neighbourhood,
    Borough,
    Localadmin,
    Locality,
    County,
    Macrocounty,
    Region,
    Macroregion,
    Country,
    Coarse,
}

/// Upstream data source for geocoding results.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GeocodeSource {
    Osm,
    Oa,
    Wof,
    Gn,
}

/// Forward search request for `/geocode/search`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeocodeSearchRequest {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layers: Option<Vec<GeocodeLayer>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<GeocodeSource>>,
    #[serde(rename = "boundary.country", skip_serializing_if = "Option::is_none")]
    pub boundary_country: Option<Vec<String>>,
    #[serde(rename = "boundary.rect", skip_serializing_if = "Option::is_none")]
    pub boundary_rect: Option<BoundingBox>,
    /// `[lon, lat, radius_km]` circle restriction.
    #[serde(rename = "boundary.circle", skip_serializing_if = "Option::is_none")]
    pub boundary_circle: Option<[f64; 3]>,
    #[serde(rename = "focus.point", skip_serializing_if = "Option::is_none")]
    pub focus_point: Option<Coordinate>,
}

/// Autocomplete takes the same parameters as forward search.
pub type AutocompleteRequest = GeocodeSearchRequest;

/// Reverse geocoding request for `/geocode/reverse`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReverseGeocodeRequest {
    #[serde(rename = "point.lon")]
    pub point_lon: f64,
    #[serde(rename = "point.lat")]
    pub point_lat: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layers: Option<Vec<GeocodeLayer>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<GeocodeSource>>,
    #[serde(rename = "boundary.country", skip_serializing_if = "Option::is_none")]
    pub boundary_country: Option<Vec<String>>,
}

/// Structured search request with separated address components.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct StructuredGeocodeRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub neighbourhood: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub borough: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub county: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postalcode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<GeocodeSource>>,
}

/// Properties of one geocoding hit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeocodeProperties {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub gid: String,
    #[serde(default)]
    pub layer: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub source_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub confidence: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accuracy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_a: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_a: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub county: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub neighbourhood: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub housenumber: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postalcode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub continent: Option<String>,
}

/// One geocoding result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeocodeFeature {
    #[serde(rename = "type")]
    pub feature_type: String,
    pub geometry: PointGeometry,
    pub properties: GeocodeProperties,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bbox: Option<BoundingBox>,
}

/// Engine block of the geocoding metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeocodingEngine {
    pub name: String,
    pub author: String,
    pub version: String,
}

/// Metadata block specific to the geocoding responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeocodingInfo {
    pub version: String,
    pub attribution: String,
    #[serde(default)]
    pub query: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warnings: Option<Vec<String>>,
    pub timestamp: i64,
    pub engine: GeocodingEngine,
}

/// Response shared by all four geocoding endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeocodeResponse {
    #[serde(rename = "type")]
    pub collection_type: String,
    pub features: Vec<GeocodeFeature>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bbox: Option<BoundingBox>,
    pub geocoding: GeocodingInfo,
}
