//! Types shared across endpoint families

use serde::{Deserialize, Serialize};

/// `[longitude, latitude]` pair. Longitude first, GeoJSON order.
pub type Coordinate = [f64; 2];

/// `[west, south, east, north]` extent.
pub type BoundingBox = [f64; 4];

/// Travel-mode selector forming part of the versioned endpoint paths.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Profile {
    DrivingCar,
    DrivingHgv,
    CyclingRegular,
    CyclingRoad,
    CyclingMountain,
    CyclingElectric,
    FootWalking,
    FootHiking,
    Wheelchair,
}

impl Profile {
    /// Path segment for this profile, e.g. `driving-car`.
    pub fn as_str(self) -> &'static str {
        match self {
            Profile::DrivingCar => "driving-car",
            Profile::DrivingHgv => "driving-hgv",
            Profile::CyclingRegular => "cycling-regular",
            Profile::CyclingRoad => "cycling-road",
            Profile::CyclingMountain => "cycling-mountain",
            Profile::CyclingElectric => "cycling-electric",
            Profile::FootWalking => "foot-walking",
            Profile::FootHiking => "foot-hiking",
            Profile::Wheelchair => "wheelchair",
        }
    }
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Distance units accepted by several request types.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DistanceUnit {
    #[serde(rename = "m")]
    Meters,
    #[serde(rename = "km")]
    Kilometers,
    #[serde(rename = "mi")]
    Miles,
}

/// Point geometry with a plain `[lon, lat]` coordinate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PointGeometry {
    #[serde(rename = "type")]
    pub geometry_type: String,
    pub coordinates: Coordinate,
}

impl PointGeometry {
    pub fn new(coordinates: Coordinate) -> Self {
        Self {
            geometry_type: "Point".to_string(),
            coordinates,
        }
    }
}

/// LineString geometry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineStringGeometry {
    #[serde(rename = "type")]
    pub geometry_type: String,
    pub coordinates: Vec<Coordinate>,
}

impl LineStringGeometry {
    pub fn new(coordinates: Vec<Coordinate>) -> Self {
        Self {
            geometry_type: "LineString".to_string(),
            coordinates,
        }
    }
}

/// Generic GeoJSON feature. Families with a fixed properties shape define
/// their own feature types; this one keeps geometry and properties open.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Feature {
    #[serde(rename = "type")]
    pub feature_type: String,
    pub geometry: serde_json::Value,
    #[serde(default)]
    pub properties: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bbox: Option<BoundingBox>,
}

/// Engine build info included in response metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EngineInfo {
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graph_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub osm_date: Option<String>,
}

/// Standard metadata block carried by most responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Metadata {
    pub attribution: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    pub timestamp: i64,
    #[serde(default)]
    pub query: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine: Option<EngineInfo>,
}

/// Response of the `/health` probe.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthStatus {
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_serialization() {
        assert_eq!(
            serde_json::to_string(&Profile::DrivingCar).unwrap(),
            "\"driving-car\""
        );
        assert_eq!(
            serde_json::to_string(&Profile::FootHiking).unwrap(),
            "\"foot-hiking\""
        );
        assert_eq!(
            serde_json::to_string(&Profile::Wheelchair).unwrap(),
            "\"wheelchair\""
        );
    }

    #[test]
    fn test_profile_path_segment_matches_wire_name() {
        for profile in [
            Profile::DrivingCar,
            Profile::DrivingHgv,
            Profile::CyclingRegular,
            Profile::CyclingRoad,
            Profile::CyclingMountain,
            Profile::CyclingElectric,
            Profile::FootWalking,
            Profile::FootHiking,
            Profile::Wheelchair,
        ] {
            let wire = serde_json::to_string(&profile).unwrap();
            assert_eq!(wire, format!("\"{}\"", profile.as_str()));
        }
    }

    #[test]
    fn test_distance_unit_serialization() {
        assert_eq!(serde_json::to_string(&DistanceUnit::Meters).unwrap(), "\"m\"");
        assert_eq!(
            serde_json::to_string(&DistanceUnit::Kilometers).unwrap(),
            "\"km\""
        );
        assert_eq!(serde_json::to_string(&DistanceUnit::Miles).unwrap(), "\"mi\"");
    }
}
