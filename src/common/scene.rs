//! Scene loading, parsing, and validation logic.
//!
//! A scene file pins down an exact topology (node positions and transmit
//! intervals) instead of generating one from a seed. Useful for replaying a
//! layout across runs or analyzing a hand-built deployment.

use anyhow::Context;
use serde::Deserialize;
use std::fs;

use crate::simulation::types::{Point, Topology};

/// Error type for scene loading failures.
#[derive(Debug)]
pub enum SceneLoadError {
    FileReadError(String),
    ParseError(String),
    ValidationError(String),
}

impl std::fmt::Display for SceneLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SceneLoadError::FileReadError(msg) => write!(f, "Failed to read file: {}", msg),
            SceneLoadError::ParseError(msg) => write!(f, "Failed to parse JSON: {}", msg),
            SceneLoadError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
        }
    }
}

impl std::error::Error for SceneLoadError {}

/// One node entry of a scene file.
#[derive(Debug, Deserialize, Clone)]
pub struct SceneNode {
    pub node_id: usize,
    pub position: Point,
    /// Seconds between packets generated by this node.
    pub transmit_interval: u32,
}

/// Root structure representing the entire scene.
#[derive(Debug, Deserialize)]
pub struct Scene {
    /// Side length of the square field the nodes live in.
    #[serde(default = "default_area_size")]
    pub area_size: f64,
    /// All nodes present in the scene.
    pub nodes: Vec<SceneNode>,
}

fn default_area_size() -> f64 {
    1.0
}

/// Load, parse, and validate a scene from a JSON file.
pub fn load_scene(path: &str) -> Result<Scene, SceneLoadError> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path))
        .map_err(|e| SceneLoadError::FileReadError(e.to_string()))?;

    let scene: Scene = serde_json::from_str(&data)
        .context("Invalid JSON format")
        .map_err(|e| SceneLoadError::ParseError(e.to_string()))?;

    validate_scene(&scene).map_err(SceneLoadError::ValidationError)?;

    Ok(scene)
}

/// Validate scene configuration.
///
/// Node IDs must exactly cover `0..N` (they become vector indices), every
/// transmit interval must be positive, and every node must sit inside the
/// declared field.
pub fn validate_scene(scene: &Scene) -> Result<(), String> {
    const MAX_NODES: usize = 10000;

    if scene.nodes.is_empty() {
        return Err("Scene must contain at least one node".to_string());
    }
    if scene.nodes.len() > MAX_NODES {
        return Err(format!("Node count {} exceeds maximum of {}", scene.nodes.len(), MAX_NODES));
    }
    if !(scene.area_size > 0.0 && scene.area_size.is_finite()) {
        return Err(format!("area_size must be a positive finite number, got {}", scene.area_size));
    }

    // Check that node IDs form the dense range 0..N
    let node_count = scene.nodes.len();
    let mut seen = vec![false; node_count];
    for node in &scene.nodes {
        if node.node_id >= node_count {
            return Err(format!(
                "node_id {} is out of range: {} nodes must be numbered 0..{}",
                node.node_id, node_count, node_count
            ));
        }
        if seen[node.node_id] {
            return Err(format!("Duplicate node_id found: {}", node.node_id));
        }
        seen[node.node_id] = true;
    }

    // Validate each node
    for node in &scene.nodes {
        if node.transmit_interval == 0 {
            return Err(format!("Node {} has a zero transmit_interval", node.node_id));
        }
        if !(node.position.x.is_finite() && node.position.y.is_finite()) {
            return Err(format!("Node {} has a non-finite position", node.node_id));
        }
        if node.position.x < 0.0 || node.position.x > scene.area_size || node.position.y < 0.0 || node.position.y > scene.area_size {
            return Err(format!(
                "Node {} position ({}, {}) is outside the field (0-{})",
                node.node_id, node.position.x, node.position.y, scene.area_size
            ));
        }
    }

    Ok(())
}

impl Scene {
    /// Reorder the nodes by ID into the dense topology representation.
    ///
    /// Assumes a validated scene; `load_scene` validates before returning.
    pub fn into_topology(self) -> Topology {
        let node_count = self.nodes.len();
        let mut positions = vec![Point { x: 0.0, y: 0.0 }; node_count];
        let mut transmit_intervals = vec![0; node_count];
        for node in self.nodes {
            positions[node.node_id] = node.position;
            transmit_intervals[node.node_id] = node.transmit_interval;
        }
        Topology {
            positions,
            transmit_intervals,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Scene {
        serde_json::from_str(json).unwrap()
    }

    const WELLFORMED: &str = r#"{
        "area_size": 2.0,
        "nodes": [
            { "node_id": 1, "position": { "x": 0.5, "y": 1.5 }, "transmit_interval": 4 },
            { "node_id": 0, "position": { "x": 0.1, "y": 0.2 }, "transmit_interval": 2 },
            { "node_id": 2, "position": { "x": 2.0, "y": 0.0 }, "transmit_interval": 10 }
        ]
    }"#;

    #[test]
    fn wellformed_scene_validates_and_orders_by_id() {
        let scene = parse(WELLFORMED);
        assert!(validate_scene(&scene).is_ok());

        // Nodes are listed out of order in the file; the topology is dense by ID
        let topology = scene.into_topology();
        assert_eq!(topology.node_count(), 3);
        assert_eq!(topology.transmit_intervals, vec![2, 4, 10]);
        assert_eq!(topology.positions[1], Point { x: 0.5, y: 1.5 });
    }

    #[test]
    fn validation_rejects_duplicate_ids() {
        let scene = parse(
            r#"{ "nodes": [
                { "node_id": 0, "position": { "x": 0.1, "y": 0.1 }, "transmit_interval": 1 },
                { "node_id": 0, "position": { "x": 0.2, "y": 0.2 }, "transmit_interval": 1 }
            ]}"#,
        );
        let err = validate_scene(&scene).unwrap_err();
        assert!(err.contains("Duplicate node_id"));
    }

    #[test]
    fn validation_rejects_gaps_in_the_id_range() {
        let scene = parse(
            r#"{ "nodes": [
                { "node_id": 0, "position": { "x": 0.1, "y": 0.1 }, "transmit_interval": 1 },
                { "node_id": 5, "position": { "x": 0.2, "y": 0.2 }, "transmit_interval": 1 }
            ]}"#,
        );
        let err = validate_scene(&scene).unwrap_err();
        assert!(err.contains("out of range"));
    }

    #[test]
    fn validation_rejects_zero_interval() {
        let scene = parse(
            r#"{ "nodes": [
                { "node_id": 0, "position": { "x": 0.1, "y": 0.1 }, "transmit_interval": 0 }
            ]}"#,
        );
        let err = validate_scene(&scene).unwrap_err();
        assert!(err.contains("transmit_interval"));
    }

    #[test]
    fn validation_rejects_positions_outside_the_field() {
        let scene = parse(
            r#"{ "area_size": 1.0, "nodes": [
                { "node_id": 0, "position": { "x": 1.5, "y": 0.1 }, "transmit_interval": 1 }
            ]}"#,
        );
        let err = validate_scene(&scene).unwrap_err();
        assert!(err.contains("outside the field"));
    }

    #[test]
    fn load_scene_reports_missing_file_as_read_error() {
        let err = load_scene("does-not-exist.json").unwrap_err();
        assert!(matches!(err, SceneLoadError::FileReadError(_)));
    }
}
