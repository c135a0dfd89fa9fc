//! Routing-tree traffic analysis.
//!
//! All traffic in the network is routed toward a designated sink node along
//! a breadth-first spanning tree. This module computes, for a given graph
//! and sink:
//! - per-node hop distances and BFS parents,
//! - per-node accumulated loads (own traffic plus everything relayed from
//!   the node's subtree),
//! - the total message-hop transmission cost of the whole network.
//!
//! Both metrics are undefined on a graph where some node cannot reach the
//! sink. `analyze` signals that with `None`; `calc_transmissions` with an
//! infinite sentinel that loses every comparison against a finite cost.

use std::collections::VecDeque;

use super::graph::Graph;

/// Result of a routing-tree analysis for one (graph, sink) pair.
///
/// All vectors are indexed by node ID. After accumulation the loads satisfy
/// `load(n) = rate(n) + Σ load(child)` over `n`'s children in the tree; the
/// sink's own generation rate stays in its tally and consumers that want
/// transmitted traffic only must exclude it themselves.
#[derive(Debug, Clone)]
pub struct TrafficAnalysis {
    /// Accumulated forwarding load per node, packets per second.
    pub loads: Vec<f64>,
    /// Hop distance from the sink per node.
    pub distances: Vec<u32>,
    /// BFS parent per node; `None` for the sink itself.
    pub parents: Vec<Option<usize>>,
}

/// Breadth-first spanning tree rooted at the sink.
struct BfsTree {
    distances: Vec<Option<u32>>,
    parents: Vec<Option<usize>>,
    /// Nodes in discovery order; hop distances are non-decreasing along it.
    order: Vec<usize>,
}

fn bfs_from(graph: &Graph, sink: usize) -> BfsTree {
    let node_count = graph.node_count();
    let mut distances = vec![None; node_count];
    let mut parents = vec![None; node_count];
    let mut order = Vec::with_capacity(node_count);

    let mut queue = VecDeque::new();
    distances[sink] = Some(0);
    queue.push_back((sink, 0u32));

    while let Some((node, distance)) = queue.pop_front() {
        order.push(node);
        // Neighbors come in ascending ID order, so among equidistant
        // candidates the lowest-ID node becomes the parent.
        for &next in graph.neighbors(node) {
            if distances[next].is_none() {
                distances[next] = Some(distance + 1);
                parents[next] = Some(node);
                queue.push_back((next, distance + 1));
            }
        }
    }

    BfsTree { distances, parents, order }
}

/// Compute per-node loads and hop distances for a sink.
///
/// Loads start at each node's own generation rate `1 / interval` and are
/// accumulated bottom-up: walking the BFS discovery order in reverse visits
/// children before their parents, so every node's load is final before it
/// is added to its parent.
///
/// Returns `None` when any node is unreachable from the sink; the caller
/// must treat that sink as not analyzable rather than trusting partial data.
pub fn analyze(graph: &Graph, sink: usize, transmit_intervals: &[u32]) -> Option<TrafficAnalysis> {
    let node_count = graph.node_count();
    let tree = bfs_from(graph, sink);
    if tree.order.len() < node_count {
        return None;
    }

    let mut loads: Vec<f64> = transmit_intervals.iter().map(|&interval| 1.0 / interval as f64).collect();
    for &node in tree.order.iter().rev() {
        if node == sink {
            continue;
        }
        if let Some(parent) = tree.parents[node] {
            let subtree_load = loads[node];
            loads[parent] += subtree_load;
        }
    }

    // Every distance is Some here, the traversal covered all nodes
    let distances = tree.distances.into_iter().flatten().collect();
    Some(TrafficAnalysis {
        loads,
        distances,
        parents: tree.parents,
    })
}

/// Total message-hop transmission cost for a sink.
///
/// Charges each non-sink node's packet rate once per hop needed to reach
/// the sink: `Σ hops(n) × rate(n)`. This is a different metric from the
/// accumulated load: it prices delivering every packet, not the forwarding
/// burden resting on individual nodes.
///
/// Returns `f64::INFINITY` when the sink is unreachable from any node, so
/// a disconnected placement loses every comparison against a finite cost.
pub fn calc_transmissions(graph: &Graph, sink: usize, transmit_intervals: &[u32]) -> f64 {
    let tree = bfs_from(graph, sink);
    if tree.order.len() < graph.node_count() {
        return f64::INFINITY;
    }

    let mut total = 0.0;
    for node in 0..graph.node_count() {
        if node == sink {
            continue;
        }
        if let Some(hops) = tree.distances[node] {
            total += hops as f64 / transmit_intervals[node] as f64;
        }
    }
    total
}
