//! Request and response types for the optimization family
//!
//! Vehicle routing problems: a fleet, jobs and/or pickup-delivery
//! shipments in, per-vehicle routes and an unassigned list out.

use crate::common::{Coordinate, Profile};
use serde::{Deserialize, Serialize};

/// Scheduled driver break.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VehicleBreak {
    pub id: u32,
    pub time_windows: Vec<[u64; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<u64>,
}

/// One vehicle of the fleet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Vehicle {
    pub id: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<Profile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<Coordinate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<Coordinate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_window: Option<[u64; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breaks: Option<Vec<VehicleBreak>>,
}

/// Job direction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum JobKind {
    Pickup,
    Delivery,
}

/// One single-stop task.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Job {
    pub id: u32,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub job_type: Option<JobKind>,
    pub location: Coordinate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_windows: Option<Vec<[u64; 2]>>,
}

/// Pickup or delivery half of a shipment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShipmentStop {
    pub id: u32,
    pub location: Coordinate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_windows: Option<Vec<[u64; 2]>>,
}

/// Paired pickup-and-delivery task.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Shipment {
    pub amount: Vec<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,
    pub pickup: ShipmentStop,
    pub delivery: ShipmentStop,
}

/// Caller-supplied travel matrices, bypassing the routing engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct MatrixOverride {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub durations: Option<Vec<Vec<f64>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distances: Option<Vec<Vec<f64>>>,
}

/// Solver options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct OptimizationOptions {
    /// Request route geometries in the solution.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub g: Option<bool>,
}

/// Whole problem definition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct OptimizationRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jobs: Option<Vec<Job>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipments: Option<Vec<Shipment>>,
    pub vehicles: Vec<Vehicle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matrix: Option<MatrixOverride>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<OptimizationOptions>,
}

/// Why a constraint was violated.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ViolationCause {
    Delay,
    LeadTime,
    Load,
    MaxTasks,
    Skills,
    Precedence,
    MissingBreak,
    MaxTravelTime,
    MaxDistance,
    MaxLoad,
}

/// One constraint violation in a route or the summary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Violation {
    pub cause: ViolationCause,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
}

/// Kind of a route step.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
    Start,
    Job,
    Pickup,
    Delivery,
    Break,
    End,
}

/// One action in a vehicle's route.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OptimizationStep {
    #[serde(rename = "type")]
    pub step_type: StepKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Coordinate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub waiting_time: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrival: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setup: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub violations: Option<Vec<Violation>>,
}

/// Complete route for one vehicle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OptimizationRoute {
    pub vehicle: u32,
    pub cost: f64,
    pub service: u64,
    pub duration: u64,
    pub waiting_time: u64,
    pub priority: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setup: Option<u64>,
    pub steps: Vec<OptimizationStep>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geometry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub violations: Option<Vec<Violation>>,
}

/// Kind of an unassigned task.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UnassignedKind {
    Job,
    Pickup,
    Delivery,
}

/// Task that could not be assigned to any vehicle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Unassigned {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: UnassignedKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Solver timing breakdown, milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ComputingTimes {
    pub loading: u64,
    pub solving: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routing: Option<u64>,
}

/// Solution summary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OptimizationSummary {
    pub cost: f64,
    pub unassigned: u32,
    pub service: u64,
    pub duration: u64,
    pub waiting_time: u64,
    pub priority: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routes: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setup: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub violations: Option<Vec<Violation>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub computing_times: Option<ComputingTimes>,
}

/// Complete solver response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OptimizationResponse {
    pub code: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub summary: OptimizationSummary,
    #[serde(default)]
    pub unassigned: Vec<Unassigned>,
    #[serde(default)]
    pub routes: Vec<OptimizationRoute>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_violation_cause_wire_names() {
        assert_eq!(
            serde_json::to_string(&ViolationCause::MaxTravelTime).unwrap(),
            "\"max_travel_time\""
        );
        assert_eq!(
            serde_json::to_string(&ViolationCause::MissingBreak).unwrap(),
            "\"missing_break\""
        );
    }

    #[test]
    fn test_minimal_request_wire_shape() {
        let request = OptimizationRequest {
            jobs: Some(vec![Job {
                id: 1,
                job_type: None,
                location: [8.68, 49.41],
                service: Some(300),
                amount: None,
                skills: None,
                priority: None,
                time_windows: None,
            }]),
            vehicles: vec![Vehicle {
                id: 1,
                profile: Some(Profile::DrivingCar),
                start: Some([8.68, 49.41]),
                end: None,
                capacity: None,
                skills: None,
                time_window: None,
                breaks: None,
            }],
            ..Default::default()
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["vehicles"][0]["profile"], "driving-car");
        assert!(json["jobs"][0].get("type").is_none());
        assert!(json.get("shipments").is_none());
    }
}
