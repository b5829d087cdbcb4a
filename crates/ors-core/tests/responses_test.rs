//! Response parsing tests against realistic upstream payloads

use ors_core::directions::{DirectionsResponse, RouteGeometry};
use ors_core::matrix::MatrixResponse;
use ors_core::optimization::{OptimizationResponse, StepKind};

#[test]
fn test_directions_response_parses() {
    let json = r#"{
        "routes": [{
            "summary": {"distance": 1408.8, "duration": 281.9},
            "segments": [{
                "distance": 1408.8,
                "duration": 281.9,
                "steps": [{
                    "distance": 241.7,
                    "duration": 58.0,
                    "type": 11,
                    "instruction": "Head west on Gerhart-Hauptmann-Straße",
                    "name": "Gerhart-Hauptmann-Straße",
                    "way_points": [0, 5]
                }]
            }],
            "geometry": "yuqlHkn~s@sqT\\jG",
            "way_points": [0, 26],
            "bbox": [8.681423, 49.414599, 8.690123, 49.420514]
        }],
        "bbox": [8.681423, 49.414599, 8.690123, 49.420514],
        "metadata": {
            "attribution": "openrouteservice.org | OpenStreetMap contributors",
            "service": "routing",
            "timestamp": 1700000000000,
            "query": {"coordinates": [[8.681495, 49.41461], [8.687872, 49.420318]]},
            "engine": {"version": "7.1.0", "build_date": "2023-07-09T01:31:50Z", "graph_date": "2023-07-02T10:40:46Z"}
        }
    }"#;

    let response: DirectionsResponse = serde_json::from_str(json).unwrap();
    assert_eq!(response.routes.len(), 1);

    let route = &response.routes[0];
    assert_eq!(route.summary.distance, 1408.8);
    assert_eq!(route.segments[0].steps[0].step_type, 11);
    assert!(matches!(route.geometry, Some(RouteGeometry::Encoded(_))));
    assert_eq!(
        response.metadata.engine.as_ref().unwrap().version,
        "7.1.0"
    );
}

#[test]
fn test_matrix_response_parses() {
    let json = r#"{
        "durations": [[0.0, 212.67], [211.17, 0.0]],
        "destinations": [
            {"location": [8.681495, 49.41461], "snapped_distance": 0.02},
            {"location": [8.686507, 49.41943], "name": "Werderplatz", "snapped_distance": 1.53}
        ],
        "sources": [
            {"location": [8.681495, 49.41461], "snapped_distance": 0.02},
            {"location": [8.686507, 49.41943], "name": "Werderplatz", "snapped_distance": 1.53}
        ],
        "metadata": {
            "attribution": "openrouteservice.org",
            "service": "matrix",
            "timestamp": 1700000000000,
            "query": {}
        }
    }"#;

    let response: MatrixResponse = serde_json::from_str(json).unwrap();
    let durations = response.durations.unwrap();
    assert_eq!(durations[0][1], 212.67);
    assert!(response.distances.is_none());
    assert_eq!(
        response.destinations.unwrap()[1].name.as_deref(),
        Some("Werderplatz")
    );
}

#[test]
fn test_optimization_response_parses() {
    let json = r#"{
        "code": 0,
        "summary": {
            "cost": 4321,
            "unassigned": 0,
            "service": 600,
            "duration": 4321,
            "waiting_time": 0,
            "priority": 0,
            "computing_times": {"loading": 120, "solving": 21, "routing": 14}
        },
        "unassigned": [],
        "routes": [{
            "vehicle": 1,
            "cost": 4321,
            "service": 600,
            "duration": 4321,
            "waiting_time": 0,
            "priority": 0,
            "steps": [
                {"type": "start", "location": [8.68, 49.41], "arrival": 0, "duration": 0},
                {"type": "job", "location": [8.69, 49.42], "id": 7, "job": 7, "service": 300, "arrival": 2161},
                {"type": "end", "location": [8.68, 49.41], "arrival": 4321, "duration": 4321}
            ]
        }]
    }"#;

    let response: OptimizationResponse = serde_json::from_str(json).unwrap();
    assert_eq!(response.code, 0);
    assert_eq!(response.routes.len(), 1);
    assert_eq!(response.routes[0].steps[1].step_type, StepKind::Job);
    assert_eq!(response.summary.computing_times.unwrap().solving, 21);
}
