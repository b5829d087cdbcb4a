//! Request and response types for the matrix family

use crate::common::{Coordinate, Metadata};
use serde::{Deserialize, Serialize};

/// What to compute between the given points.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MatrixMetric {
    Duration,
    Distance,
}

/// Matrix calculation request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct MatrixRequest {
    pub locations: Vec<Coordinate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Indices into `locations` used as sources; all when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<usize>>,
    /// Indices into `locations` used as destinations; all when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destinations: Option<Vec<usize>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<Vec<MatrixMetric>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolve_locations: Option<bool>,
}

/// Where the upstream snapped an input coordinate onto the road network.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResolvedLocation {
    pub location: Coordinate,
    pub snapped_distance: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Matrix response. `durations` are seconds, `distances` meters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatrixResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub durations: Option<Vec<Vec<f64>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distances: Option<Vec<Vec<f64>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<ResolvedLocation>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destinations: Option<Vec<ResolvedLocation>>,
    pub metadata: Metadata,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_omits_unset_fields() {
        let request = MatrixRequest {
            locations: vec![[8.68, 49.41], [8.69, 49.42]],
            metrics: Some(vec![MatrixMetric::Duration, MatrixMetric::Distance]),
            ..Default::default()
        };

        let json = serde_json::to_value(&request).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert_eq!(json["metrics"], serde_json::json!(["duration", "distance"]));
    }
}
