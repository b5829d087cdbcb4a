//! Request and response types for the elevation family
//!
//! The upstream picks the response shape from `format_out`, so the
//! service methods return an untagged result enum.

use crate::common::{Coordinate, LineStringGeometry, PointGeometry};
use serde::{Deserialize, Serialize};

/// Input/output encodings understood by the elevation endpoints.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ElevationFormat {
    Geojson,
    Point,
    Polyline,
    Encodedpolyline,
}

/// Single-point elevation request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ElevationPointRequest {
    pub format_in: ElevationFormat,
    pub format_out: ElevationFormat,
    pub geometry: PointGeometry,
}

/// Elevation profile request along a line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ElevationLineRequest {
    pub format_in: ElevationFormat,
    pub format_out: ElevationFormat,
    pub geometry: LineStringGeometry,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<[f64; 2]>,
}

/// Point geometry with elevation: `[lon, lat, ele]`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Point3Geometry {
    #[serde(rename = "type")]
    pub geometry_type: String,
    pub coordinates: [f64; 3],
}

/// LineString geometry with elevation per vertex.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Line3Geometry {
    #[serde(rename = "type")]
    pub geometry_type: String,
    pub coordinates: Vec<[f64; 3]>,
}

/// Plain (non-GeoJSON) point response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ElevationPointResponse {
    pub attribution: String,
    pub timestamp: i64,
    pub version: String,
    pub geometry: Point3Geometry,
}

/// Plain (non-GeoJSON) line response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ElevationLineResponse {
    pub attribution: String,
    pub timestamp: i64,
    pub version: String,
    pub geometry: Line3Geometry,
}

/// Properties of one elevation feature.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ElevationProperties {
    pub elevation: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
}

/// One elevation sample as a GeoJSON feature.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ElevationFeature {
    #[serde(rename = "type")]
    pub feature_type: String,
    pub geometry: Point3Geometry,
    pub properties: ElevationProperties,
}

/// GeoJSON response shared by the point and line endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ElevationGeoJsonResponse {
    #[serde(rename = "type")]
    pub collection_type: String,
    pub features: Vec<ElevationFeature>,
}

/// Point endpoint result, shape chosen upstream from `format_out`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ElevationPointResult {
    GeoJson(ElevationGeoJsonResponse),
    Plain(ElevationPointResponse),
}

/// Line endpoint result, shape chosen upstream from `format_out`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ElevationLineResult {
    GeoJson(ElevationGeoJsonResponse),
    Plain(ElevationLineResponse),
}

impl ElevationPointRequest {
    /// GeoJSON-in, point-out request for a single coordinate.
    pub fn for_point(coordinates: Coordinate) -> Self {
        Self {
            format_in: ElevationFormat::Geojson,
            format_out: ElevationFormat::Point,
            geometry: PointGeometry::new(coordinates),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_result_parses_plain_shape() {
        let json = r#"{
            "attribution": "openrouteservice.org",
            "timestamp": 1700000000,
            "version": "0.2.1",
            "geometry": {"type": "Point", "coordinates": [8.68, 49.41, 117.0]}
        }"#;

        let result: ElevationPointResult = serde_json::from_str(json).unwrap();
        assert!(matches!(result, ElevationPointResult::Plain(_)));
    }

    #[test]
    fn test_point_result_parses_geojson_shape() {
        let json = r#"{
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "geometry": {"type": "Point", "coordinates": [8.68, 49.41, 117.0]},
                "properties": {"elevation": 117.0}
            }]
        }"#;

        let result: ElevationPointResult = serde_json::from_str(json).unwrap();
        assert!(matches!(result, ElevationPointResult::GeoJson(_)));
    }

    #[test]
    fn test_for_point_uses_geojson_input() {
        let request = ElevationPointRequest::for_point([8.68, 49.41]);
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["format_in"], "geojson");
        assert_eq!(json["format_out"], "point");
        assert_eq!(json["geometry"]["type"], "Point");
    }
}
