use serde::{Deserialize, Serialize};

use super::defaults;

/// Settings for simulated portals used in demos and tests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// RNG seed. `None` seeds from entropy.
    pub seed: Option<u64>,
    /// Probability a call comes back unavailable.
    pub unavailable_rate: f64,
    /// Probability an available portal reports no match.
    pub not_found_rate: f64,
    pub min_latency_ms: u64,
    pub max_latency_ms: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: None,
            unavailable_rate: defaults::DEFAULT_UNAVAILABLE_RATE,
            not_found_rate: defaults::DEFAULT_NOT_FOUND_RATE,
            min_latency_ms: defaults::DEFAULT_MIN_LATENCY_MS,
            max_latency_ms: defaults::DEFAULT_MAX_LATENCY_MS,
        }
    }
}
