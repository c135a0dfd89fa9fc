//! Simulation configuration loading.

use serde::Deserialize;
use std::path::Path;

/// Process-wide simulation parameters, fixed for a run.
///
/// An explicit value handed to the topology provider at startup; nothing in
/// the simulation reads global state.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct SimConfig {
    /// Random seed for reproducible topologies
    pub seed: u64,
    /// Number of sensor nodes placed in the field
    pub num_nodes: usize,
    /// Side length of the square simulation field
    pub area_size: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            num_nodes: 100,
            area_size: 1.0,
        }
    }
}

impl SimConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Arguments
    /// * `config_path` - Path to the config.toml file
    ///
    /// # Returns
    /// * `Ok(SimConfig)` if the file was successfully loaded and parsed
    /// * `Err(String)` with a descriptive error message otherwise
    pub fn load(config_path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(config_path).map_err(|e| format!("Failed to read config file: {}", e))?;

        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {}", e))
    }

    /// Check the configuration for values the simulation cannot work with.
    pub fn validate(&self) -> Result<(), String> {
        if self.num_nodes == 0 {
            return Err("num-nodes must be at least 1".to_string());
        }
        if !(self.area_size > 0.0 && self.area_size.is_finite()) {
            return Err(format!("area-size must be a positive finite number, got {}", self.area_size));
        }
        Ok(())
    }
}
