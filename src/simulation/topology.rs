//! Random topology generation.
//!
//! Places nodes uniformly in the square field and assigns each one a
//! transmit interval. Everything is drawn from a single RNG seeded from the
//! configuration, so a run is fully reproducible from its config file.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Uniform};

use super::types::{MAX_TRANSMIT_INTERVAL, MIN_TRANSMIT_INTERVAL, Point, Topology};
use crate::common::config::SimConfig;

/// Generate a random topology from the configuration.
///
/// Coordinates are uniform in `[0, area_size)` per axis; transmit intervals
/// are uniform integers in [`MIN_TRANSMIT_INTERVAL`]..=[`MAX_TRANSMIT_INTERVAL`]
/// seconds. Deterministic for a fixed seed.
pub fn generate(config: &SimConfig) -> Topology {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let side = Uniform::new(0.0, config.area_size);

    let positions = (0..config.num_nodes)
        .map(|_| Point {
            x: side.sample(&mut rng),
            y: side.sample(&mut rng),
        })
        .collect();
    let transmit_intervals = (0..config.num_nodes).map(|_| rng.gen_range(MIN_TRANSMIT_INTERVAL..=MAX_TRANSMIT_INTERVAL)).collect();

    Topology {
        positions,
        transmit_intervals,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_is_deterministic_per_seed() {
        let config = SimConfig {
            seed: 42,
            num_nodes: 50,
            area_size: 1.0,
        };
        let first = generate(&config);
        let second = generate(&config);
        assert_eq!(first.positions, second.positions);
        assert_eq!(first.transmit_intervals, second.transmit_intervals);

        let other_seed = SimConfig { seed: 43, ..config };
        let third = generate(&other_seed);
        assert_ne!(first.positions, third.positions);
    }

    #[test]
    fn generated_values_respect_configured_bounds() {
        let config = SimConfig {
            seed: 1,
            num_nodes: 200,
            area_size: 2.5,
        };
        let topology = generate(&config);
        assert_eq!(topology.node_count(), 200);
        for position in &topology.positions {
            assert!(position.x >= 0.0 && position.x < config.area_size);
            assert!(position.y >= 0.0 && position.y < config.area_size);
        }
        for &interval in &topology.transmit_intervals {
            assert!((MIN_TRANSMIT_INTERVAL..=MAX_TRANSMIT_INTERVAL).contains(&interval));
        }
    }
}
