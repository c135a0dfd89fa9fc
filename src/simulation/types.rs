//! Type definitions for the simulation.
//!
//! Contains the data structures shared across the simulation core:
//! - Node coordinates and the static topology (positions, transmit intervals)
//! - Constants for the minimum-connectivity radius search
//!
//! Node IDs are dense `usize` indices in `0..node_count()`, so all per-node
//! data lives in plain vectors indexed by ID rather than keyed maps. Lookups
//! stay bounds-checked and the hot loops allocate nothing.

use serde::Deserialize;

/// Radius increment used by the minimum-connectivity search.
pub const RADIUS_STEP: f64 = 0.01;

/// Upper bound of the radius search, roughly the diagonal span of the unit
/// field. Returned as a best-effort sentinel when no smaller radius connects
/// the network; callers that need a guarantee re-check connectivity.
pub const RADIUS_CEILING: f64 = 2.0;

/// Shortest transmit interval assigned during topology generation (seconds).
pub const MIN_TRANSMIT_INTERVAL: u32 = 1;

/// Longest transmit interval assigned during topology generation (seconds).
pub const MAX_TRANSMIT_INTERVAL: u32 = 10;

/// Simple 2D point.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Static node layout for one simulation run.
///
/// Immutable after creation: connectivity graphs and routing trees are
/// derived from it, never written back.
#[derive(Debug, Clone)]
pub struct Topology {
    /// Node coordinates, indexed by node ID.
    pub positions: Vec<Point>,
    /// Seconds between packets generated by each node. A node's packet rate
    /// is `1 / interval` packets per second.
    pub transmit_intervals: Vec<u32>,
}

impl Topology {
    pub fn node_count(&self) -> usize {
        self.positions.len()
    }
}
