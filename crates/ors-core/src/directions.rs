//! Request and response types for the directions family

use crate::common::{BoundingBox, Coordinate, DistanceUnit, Feature, LineStringGeometry, Metadata};
use serde::{Deserialize, Serialize};

/// Route optimization preference.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RoutingPreference {
    Recommended,
    Fastest,
    Shortest,
}

/// Format for turn-by-turn instructions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InstructionFormat {
    Text,
    Json,
}

/// Extra per-segment attributes that can be requested.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RouteAttribute {
    Avgspeed,
    Percentage,
    Detourfactor,
    Tollways,
}

/// Extra per-way information that can be requested.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ExtraInfo {
    Steepness,
    Suitability,
    Surface,
    Waycategory,
    Waytype,
    Tollways,
    Traildifficulty,
    Osmid,
    Roadaccessrestrictions,
    Countryinfo,
    Green,
    Noise,
}

/// Alternative-route configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AlternativeRoutes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_factor: Option<f64>,
}

/// Speed rule of a custom model. The condition is either a boolean or an
/// expression string, so it stays an open JSON value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpeedRule {
    #[serde(rename = "if")]
    pub condition: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit_to: Option<f64>,
}

/// Priority rule of a custom model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PriorityRule {
    #[serde(rename = "if")]
    pub condition: String,
    pub multiply_by: f64,
}

/// Custom routing rules applied on top of the profile defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CustomModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<Vec<SpeedRule>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Vec<PriorityRule>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_influence: Option<f64>,
}

/// Border-crossing preference.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AvoidBorders {
    All,
    Controlled,
    None,
}

/// Road or route features to avoid.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AvoidFeature {
    Highways,
    Tollways,
    Ferries,
    Fords,
    Steps,
}

/// Vehicle category for heavy-vehicle routing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum VehicleType {
    Hgv,
    Agricultural,
    Delivery,
    Forestry,
    Goods,
}

/// Vehicle dimension and load restrictions (mainly for trucks).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct VehicleRestrictions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axleload: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hazmat: Option<bool>,
}

/// Profile-specific routing parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ProfileParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restrictions: Option<VehicleRestrictions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surface_quality_known: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_unsuitable: Option<bool>,
}

/// Routing preferences and restrictions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct RoutingOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avoid_borders: Option<AvoidBorders>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avoid_features: Option<Vec<AvoidFeature>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avoid_countries: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_type: Option<VehicleType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_params: Option<ProfileParams>,
}

/// Response format selector for POST requests.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DirectionsFormat {
    Json,
    Geojson,
}

/// Simple GET request: just a start and an end point.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DirectionsGetRequest {
    pub start: Coordinate,
    pub end: Coordinate,
}

/// Full POST request with routing options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DirectionsPostRequest {
    /// Route points, `[lon, lat]` each; waypoints go between start and end.
    pub coordinates: Vec<Coordinate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternative_routes: Option<AlternativeRoutes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<RouteAttribute>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub continue_straight: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_model: Option<CustomModel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_info: Option<Vec<ExtraInfo>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elevation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geometry_simplify: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions_format: Option<InstructionFormat>,
    /// Two-letter language code for instructions, e.g. `en` or `de`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maneuvers: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<RoutingOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preference: Option<RoutingPreference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radiuses: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roundabout_exits: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_segments: Option<Vec<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suppress_warnings: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub units: Option<DistanceUnit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geometry: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_speed: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<DirectionsFormat>,
}

/// Detailed maneuver info for navigation apps.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Maneuver {
    pub bearing_after: f64,
    pub bearing_before: f64,
    pub location: Coordinate,
    #[serde(rename = "type")]
    pub maneuver_type: String,
}

/// One turn-by-turn step.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RouteStep {
    pub distance: f64,
    pub duration: f64,
    /// Instruction type code (internal upstream numbering).
    #[serde(rename = "type")]
    pub step_type: u32,
    pub instruction: String,
    pub name: String,
    /// Start and end indices of this step in the route geometry.
    pub way_points: [u32; 2],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maneuver: Option<Maneuver>,
}

/// Route portion between two consecutive waypoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RouteSegment {
    pub distance: f64,
    pub duration: f64,
    #[serde(default)]
    pub steps: Vec<RouteStep>,
}

/// Aggregate route numbers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RouteSummary {
    pub distance: f64,
    pub duration: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ascent: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descent: Option<f64>,
}

/// Route geometry: an encoded polyline by default, a decoded LineString
/// when the request asked for one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum RouteGeometry {
    Encoded(String),
    LineString(LineStringGeometry),
}

/// One complete route, main or alternative.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Route {
    pub summary: RouteSummary,
    #[serde(default)]
    pub segments: Vec<RouteSegment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geometry: Option<RouteGeometry>,
    #[serde(default)]
    pub way_points: Vec<u32>,
    pub bbox: BoundingBox,
    /// Extra info keyed by the requested kind, kept open-shaped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extras: Option<serde_json::Value>,
}

/// JSON response of the directions endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DirectionsResponse {
    pub routes: Vec<Route>,
    pub bbox: BoundingBox,
    pub metadata: Metadata,
}

/// GeoJSON response of the directions endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DirectionsGeoJsonResponse {
    #[serde(rename = "type")]
    pub collection_type: String,
    pub features: Vec<Feature>,
    pub bbox: BoundingBox,
    pub metadata: Metadata,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_request_omits_unset_fields() {
        let request = DirectionsPostRequest {
            coordinates: vec![[8.681495, 49.41461], [8.686507, 49.41943]],
            ..Default::default()
        };

        let json = serde_json::to_value(&request).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 1);
        assert!(object.contains_key("coordinates"));
    }

    #[test]
    fn test_route_geometry_accepts_both_shapes() {
        let encoded: RouteGeometry = serde_json::from_str("\"u`rgHir~s@\"").unwrap();
        assert!(matches!(encoded, RouteGeometry::Encoded(_)));

        let decoded: RouteGeometry = serde_json::from_str(
            r#"{"type":"LineString","coordinates":[[8.68,49.41],[8.69,49.42]]}"#,
        )
        .unwrap();
        assert!(matches!(decoded, RouteGeometry::LineString(_)));
    }

    #[test]
    fn test_avoid_feature_wire_names() {
        assert_eq!(
            serde_json::to_string(&AvoidFeature::Tollways).unwrap(),
            "\"tollways\""
        );
        assert_eq!(
            serde_json::to_string(&AvoidBorders::Controlled).unwrap(),
            "\"controlled\""
        );
    }

    #[test]
    fn test_custom_model_rules_use_if_key() {
        let model = CustomModel {
            speed: Some(vec![SpeedRule {
                condition: serde_json::json!("road_class == MOTORWAY"),
                limit_to: Some(90.0),
            }]),
            priority: None,
            distance_influence: None,
        };

        let json = serde_json::to_value(&model).unwrap();
        assert!(json["speed"][0].get("if").is_some());
    }
}
