//! Experiment driver for the sensor network traffic simulator.
//!
//! Lays out a static sensor network (randomly from the configuration, or
//! from a scene file given as the first argument), finds the minimum
//! communication radius that connects it, and reports the routing-tree
//! traffic analyses: sink placement study, radius sweep, load profile, and
//! the optimal sink for the energy and lifetime objectives.

use env_logger::Builder;
use log::{LevelFilter, debug, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::Path;

mod common;
mod experiments;
mod simulation;

use common::config::SimConfig;
use common::scene;
use simulation::topology;
use simulation::{build_graph, find_min_radius, optimize};

/// Number of candidate sinks compared in the sink placement study.
const SINK_PLACEMENT_CANDIDATES: usize = 20;

/// Sink used for the load profile report.
const LOAD_PROFILE_SINK: usize = 0;

fn main() -> anyhow::Result<()> {
    // Logging setup
    Builder::new()
        .filter_level(LevelFilter::Info)
        .filter(Some("wsn_traffic_simulator"), LevelFilter::Debug)
        .init();

    info!("Starting up");

    let config_path = Path::new("config.toml");
    let config = if config_path.exists() {
        let config = SimConfig::load(config_path).map_err(anyhow::Error::msg)?;
        info!("Loaded configuration file: {:?}", config_path);
        config
    } else {
        debug!("No configuration file found, using defaults");
        SimConfig::default()
    };
    config.validate().map_err(anyhow::Error::msg)?;

    let topology = match std::env::args().nth(1) {
        Some(scene_path) => {
            info!("Using provided scene path: {}", scene_path);
            scene::load_scene(&scene_path)?.into_topology()
        }
        None => topology::generate(&config),
    };
    info!("Simulation started with {} nodes", topology.node_count());

    let min_radius = find_min_radius(&topology.positions);
    info!("Minimum radius for connectivity: {:.4}", min_radius);

    let graph = build_graph(min_radius, &topology.positions);
    info!("Base graph has {} edges", graph.edge_count());
    if !graph.is_connected() {
        warn!("Network is still disconnected at the search ceiling, results cover reachable sinks only");
    }

    // Part 1a: does a well-connected sink reduce the total transmission cost?
    let mut rng = StdRng::seed_from_u64(config.seed);
    info!("--- Sink placement study ---");
    let samples = experiments::sink_placement_study(&graph, &topology.transmit_intervals, &mut rng, SINK_PLACEMENT_CANDIDATES);
    for sample in &samples {
        info!(
            "sink {:>3}: {:>2} neighbors, total transmissions {:.3}",
            sample.sink, sample.neighbor_count, sample.total_transmissions
        );
    }

    // Part 1b: how does growing the radius change the cost?
    info!("--- Radius sweep ---");
    let sweep = experiments::radius_sweep(&topology, min_radius);
    if sweep.is_empty() {
        warn!("No connected graph in the swept radius range");
    }
    for sample in &sweep {
        info!("radius {:.2}: total transmissions {:.3}", sample.radius, sample.total_transmissions);
    }

    // Part 2.1: load vs. distance for a fixed sink (the energy-hole picture)
    info!("--- Load profile (sink {}) ---", LOAD_PROFILE_SINK);
    match experiments::load_profile(&graph, &topology.transmit_intervals, LOAD_PROFILE_SINK) {
        Some(profile) => {
            for sample in &profile {
                debug!(
                    "node {:>3} via {:?}: {} hops, load {:.3} packets/s",
                    sample.node, sample.next_hop, sample.distance, sample.load
                );
            }
            let max_distance = profile.iter().map(|sample| sample.distance).max().unwrap_or(0);
            let max_load = profile.iter().map(|sample| sample.load).fold(0.0_f64, f64::max);
            info!("{} nodes, up to {} hops, heaviest load {:.3} packets/s", profile.len(), max_distance, max_load);
        }
        None => warn!("Sink {} is unreachable from part of the network, load profile skipped", LOAD_PROFILE_SINK),
    }

    // Part 2.2: best sink for each objective
    info!("--- Sink optimization ---");
    match optimize(&graph, &topology.transmit_intervals) {
        Some(optimum) => {
            info!(
                "Optimal sink for minimum total energy: node {} (total load {:.2})",
                optimum.energy_sink, optimum.total_energy
            );
            info!(
                "Optimal sink for maximum lifetime: node {} (max node load {:.2})",
                optimum.lifetime_sink, optimum.max_load
            );
        }
        None => warn!("No candidate sink can reach every node, optimization skipped"),
    }

    info!("Simulation completed");
    Ok(())
}
