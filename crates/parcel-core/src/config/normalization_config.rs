use serde::{Deserialize, Serialize};

use super::defaults;

/// Normalizer configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizationConfig {
    /// Offset coordinates by a deterministic per-property jitter (demo only).
    pub coordinate_jitter: bool,
    /// Maximum jitter in degrees along each axis.
    pub jitter_degrees: f64,
}

impl Default for NormalizationConfig {
    fn default() -> Self {
        Self {
            coordinate_jitter: defaults::DEFAULT_COORDINATE_JITTER,
            jitter_degrees: defaults::DEFAULT_JITTER_DEGREES,
        }
    }
}
