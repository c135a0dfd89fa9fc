//! Sensor network simulation core.
//!
//! This module contains the whole analysis pipeline for a static sensor
//! network: from node placement to connectivity to routing-tree traffic.
//!
//! ## Module Organization
//!
//! - `types`: Core data structures (Point, Topology) and search constants
//! - `geometry`: Distance calculations for the proximity model
//! - `topology`: Seeded random node placement and transmit intervals
//! - `graph`: Proximity graph construction and minimum-radius search
//! - `routing`: BFS routing tree, load accumulation, transmission cost
//! - `sink`: Candidate-sink sweep for the energy and lifetime objectives
//!
//! Everything here is synchronous and pure: derived structures (graphs,
//! routing trees, optima) are built fresh from immutable inputs, so any
//! step can be re-run or parallelized without coordination.

pub mod geometry;
pub mod graph;
pub mod routing;
pub mod sink;
pub mod topology;
pub mod types;

// Re-export the types making up the public surface of the core
pub use graph::{Graph, build_graph, find_min_radius};
pub use routing::{TrafficAnalysis, analyze, calc_transmissions};
pub use sink::{SinkOptimum, optimize};
pub use types::{Point, Topology};
