//! Workspace configuration, loaded from TOML.
//!
//! Every section is `#[serde(default)]`, so an empty document yields the
//! built-in defaults and partial documents override only what they name.
//!
//! # Examples
//!
//! ```
//! use parcel_core::config::ParcelConfig;
//! use parcel_core::models::SourceId;
//!
//! let config = ParcelConfig::from_toml("[aggregation]\nper_call_timeout_ms = 2000").unwrap();
//! assert_eq!(config.aggregation.per_call_timeout_ms, 2000);
//! assert_eq!(config.trust.score_for(SourceId::Cersai).value(), 90);
//! ```

mod aggregation_config;
pub mod defaults;
mod merge_config;
mod normalization_config;
mod observability_config;
mod portal_config;
mod routing_config;
mod simulation_config;
mod trust_config;

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub use aggregation_config::AggregationConfig;
pub use merge_config::MergeConfig;
pub use normalization_config::NormalizationConfig;
pub use observability_config::ObservabilityConfig;
pub use portal_config::{PortalEndpointConfig, PortalsConfig};
pub use routing_config::RoutingConfig;
pub use simulation_config::SimulationConfig;
pub use trust_config::TrustConfig;

use crate::errors::ConfigError;
use crate::models::SourceId;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ParcelConfig {
    pub portals: PortalsConfig,
    pub routing: RoutingConfig,
    pub merge: MergeConfig,
    pub trust: TrustConfig,
    pub normalization: NormalizationConfig,
    pub aggregation: AggregationConfig,
    pub simulation: SimulationConfig,
    pub observability: ObservabilityConfig,
}

impl ParcelConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::Parse {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml(&content)
    }

    /// Check cross-field invariants the type system cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_unique("routing.default_order", &self.routing.default_order)?;
        ensure_unique("merge.priority", &self.merge.priority)?;

        if self.aggregation.per_call_timeout_ms == 0 {
            return Err(invalid(
                "aggregation.per_call_timeout_ms",
                "must be greater than zero",
            ));
        }

        let sim = &self.simulation;
        for (key, rate) in [
            ("simulation.unavailable_rate", sim.unavailable_rate),
            ("simulation.not_found_rate", sim.not_found_rate),
        ] {
            if !(0.0..=1.0).contains(&rate) {
                return Err(invalid(key, "must be within [0.0, 1.0]"));
            }
        }
        if sim.min_latency_ms > sim.max_latency_ms {
            return Err(invalid(
                "simulation.min_latency_ms",
                "must not exceed simulation.max_latency_ms",
            ));
        }

        if let Some((source, score)) = self.trust.scores.iter().find(|(_, s)| **s > 100) {
            return Err(invalid(
                &format!("trust.{source}"),
                &format!("{score} is above 100"),
            ));
        }

        if !(0.0..=1.0).contains(&self.normalization.jitter_degrees) {
            return Err(invalid(
                "normalization.jitter_degrees",
                "must be within [0.0, 1.0]",
            ));
        }

        Ok(())
    }
}

fn invalid(key: &str, reason: &str) -> ConfigError {
    ConfigError::Invalid {
        key: key.to_string(),
        reason: reason.to_string(),
    }
}

fn ensure_unique(key: &str, sources: &[SourceId]) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();
    for source in sources {
        if !seen.insert(source) {
            return Err(invalid(key, &format!("{source} listed more than once")));
        }
    }
    Ok(())
}
