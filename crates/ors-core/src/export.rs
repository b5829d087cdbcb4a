//! Request and response types for the export family
//!
//! Export returns the raw routing graph (nodes and weighted edges)
//! within a bounding box.

use crate::common::{BoundingBox, Coordinate};
use serde::{Deserialize, Serialize};

/// Graph export request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExportRequest {
    /// `[[min_lon, min_lat], [max_lon, max_lat]]`.
    pub bbox: [Coordinate; 2],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geometry: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// One node (intersection) of the routing graph.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GraphNode {
    #[serde(rename = "nodeId")]
    pub node_id: i64,
    pub location: Coordinate,
}

/// One directed edge (road segment) of the routing graph.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GraphEdge {
    #[serde(rename = "fromId")]
    pub from_id: i64,
    #[serde(rename = "toId")]
    pub to_id: i64,
    /// Travel cost, reported as a decimal string upstream.
    pub weight: String,
}

/// JSON export response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExportResponse {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
    pub nodes_count: u64,
    pub edges_count: u64,
}

/// TopoJSON coordinate transform.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TopoTransform {
    pub scale: [f64; 2],
    pub translate: [f64; 2],
}

/// TopoJSON export response. The `objects`/`arcs` topology stays
/// open-shaped.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExportTopoJsonResponse {
    #[serde(rename = "type")]
    pub topology_type: String,
    pub objects: serde_json::Value,
    pub arcs: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bbox: Option<BoundingBox>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transform: Option<TopoTransform>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graph_ids_use_camel_case_wire_names() {
        let json = r#"{
            "nodes": [{"nodeId": 1, "location": [8.68, 49.41]}],
            "edges": [{"fromId": 1, "toId": 2, "weight": "12.5"}],
            "nodes_count": 1,
            "edges_count": 1
        }"#;

        let response: ExportResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.nodes[0].node_id, 1);
        assert_eq!(response.edges[0].to_id, 2);
        assert_eq!(response.edges[0].weight, "12.5");
    }
}
