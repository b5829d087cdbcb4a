//! Request and response types for the snap family

use crate::common::{BoundingBox, Coordinate, Metadata, PointGeometry};
use serde::{Deserialize, Serialize};

/// Snap request: coordinates and a search radius in meters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SnapRequest {
    pub locations: Vec<Coordinate>,
    pub radius: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Where one input coordinate landed on the road network.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SnappedLocation {
    pub location: Coordinate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub snapped_distance: f64,
}

/// JSON response: one entry per input, `null` where snapping failed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SnapResponse {
    pub locations: Vec<Option<SnappedLocation>>,
    pub metadata: Metadata,
}

/// Properties of one snapped GeoJSON feature.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SnapFeatureProperties {
    /// Index of the input coordinate this feature answers.
    pub source_id: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub snapped_distance: f64,
}

/// One snapped location as a GeoJSON feature.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SnapFeature {
    #[serde(rename = "type")]
    pub feature_type: String,
    pub geometry: PointGeometry,
    pub properties: SnapFeatureProperties,
}

/// GeoJSON response; unsnappable inputs are simply absent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SnapGeoJsonResponse {
    #[serde(rename = "type")]
    pub collection_type: String,
    pub features: Vec<SnapFeature>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bbox: Option<BoundingBox>,
    pub metadata: Metadata,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_keeps_null_slots() {
        let json = r#"{
            "locations": [
                {"location": [8.68, 49.41], "name": "Berliner Straße", "snapped_distance": 2.1},
                null
            ],
            "metadata": {
                "attribution": "openrouteservice.org",
                "timestamp": 1700000000000,
                "query": {}
            }
        }"#;

        let response: SnapResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.locations.len(), 2);
        assert!(response.locations[0].is_some());
        assert!(response.locations[1].is_none());
    }
}
