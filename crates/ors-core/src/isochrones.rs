//! Request and response types for the isochrones family

use crate::common::{BoundingBox, Coordinate, DistanceUnit, Feature, Metadata};
use serde::{Deserialize, Serialize};

/// Whether ranges are travel time or travel distance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RangeType {
    Time,
    Distance,
}

/// Whether the locations are treated as start or destination points.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LocationType {
    Start,
    Destination,
}

/// Units for reported isochrone areas.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AreaUnit {
    #[serde(rename = "m")]
    SquareMeters,
    #[serde(rename = "km")]
    SquareKilometers,
    #[serde(rename = "ha")]
    Hectares,
    #[serde(rename = "mi")]
    SquareMiles,
    #[serde(rename = "ft")]
    SquareFeet,
}

/// Isochrone calculation request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct IsochroneRequest {
    pub locations: Vec<Coordinate>,
    /// Range values: seconds for time, meters for distance.
    pub range: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range_type: Option<RangeType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_type: Option<LocationType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smoothing: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intersections: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub units: Option<DistanceUnit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_units: Option<AreaUnit>,
}

/// GeoJSON response with one polygon feature per location/range pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IsochroneResponse {
    #[serde(rename = "type")]
    pub collection_type: String,
    pub features: Vec<Feature>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bbox: Option<BoundingBox>,
    pub metadata: Metadata,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_shape() {
        let request = IsochroneRequest {
            locations: vec![[8.68, 49.41]],
            range: vec![300.0, 600.0],
            range_type: Some(RangeType::Time),
            ..Default::default()
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["range_type"], "time");
        assert!(json.get("smoothing").is_none());
    }
}
