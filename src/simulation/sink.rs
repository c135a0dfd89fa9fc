//! Sink placement optimization.
//!
//! Sweeps every node as a candidate sink and tracks the best placement for
//! two competing objectives:
//! - minimum total energy: the sum of all forwarding loads, a proxy for
//!   network-wide power consumption,
//! - maximum lifetime: the smallest worst-case single-node load, since the
//!   most burdened node drains its battery first.
//!
//! The two optima routinely differ; a central sink tends to minimize total
//! energy while a placement that spreads relay duty wins on lifetime.

use log::debug;

use super::graph::Graph;
use super::routing::analyze;

/// Best sink placements found by [`optimize`].
#[derive(Debug, Clone, PartialEq)]
pub struct SinkOptimum {
    /// Sink minimizing the total network energy.
    pub energy_sink: usize,
    /// Total energy at `energy_sink`: sum of all loads minus the sink's own tally.
    pub total_energy: f64,
    /// Sink minimizing the worst single-node load.
    pub lifetime_sink: usize,
    /// The worst single-node load at `lifetime_sink`.
    pub max_load: f64,
}

/// Evaluate every node as a candidate sink and return the optima.
///
/// Candidates whose routing analysis fails (sink unreachable from part of
/// the network) are skipped. Both minima are tracked with a strict
/// comparison, so on ties the lowest-ID candidate wins deterministically.
/// Returns `None` when no candidate at all could be analyzed.
pub fn optimize(graph: &Graph, transmit_intervals: &[u32]) -> Option<SinkOptimum> {
    let mut energy_best: Option<(usize, f64)> = None;
    let mut lifetime_best: Option<(usize, f64)> = None;

    for candidate in 0..graph.node_count() {
        let Some(analysis) = analyze(graph, candidate, transmit_intervals) else {
            debug!("sink candidate {} skipped: unreachable from part of the network", candidate);
            continue;
        };

        // The sink does not retransmit, so its own tally is excluded from
        // both objectives.
        let total_energy: f64 = analysis.loads.iter().sum::<f64>() - analysis.loads[candidate];
        let max_load = analysis
            .loads
            .iter()
            .enumerate()
            .filter(|&(node, _)| node != candidate)
            .map(|(_, &load)| load)
            .fold(0.0_f64, f64::max);

        if energy_best.map_or(true, |(_, best)| total_energy < best) {
            energy_best = Some((candidate, total_energy));
        }
        if lifetime_best.map_or(true, |(_, best)| max_load < best) {
            lifetime_best = Some((candidate, max_load));
        }
    }

    match (energy_best, lifetime_best) {
        (Some((energy_sink, total_energy)), Some((lifetime_sink, max_load))) => Some(SinkOptimum {
            energy_sink,
            total_energy,
            lifetime_sink,
            max_load,
        }),
        _ => None,
    }
}
