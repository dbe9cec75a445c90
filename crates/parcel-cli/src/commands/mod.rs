mod portals;
mod search;

use std::path::Path;

use anyhow::{bail, Context, Result};
use parcel_core::config::ParcelConfig;
use parcel_portals::PortalRegistry;

use crate::cli::SourceArgs;

pub use portals::run_portals;
pub use search::run_search;

/// Load the config file if one was given, else the built-in defaults.
pub fn load_config(path: Option<&Path>) -> Result<ParcelConfig> {
    match path {
        Some(path) => ParcelConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => Ok(ParcelConfig::default()),
    }
}

/// Build the portal registry: simulated when asked for, HTTP otherwise.
fn build_registry(config: &mut ParcelConfig, source: &SourceArgs) -> Result<PortalRegistry> {
    if source.simulated() {
        if source.seed.is_some() {
            config.simulation.seed = source.seed;
        }
        return Ok(PortalRegistry::simulated(&config.portals, &config.simulation));
    }

    let registry = PortalRegistry::from_config(&config.portals).context("failed to build portal clients")?;
    if registry.is_empty() {
        bail!("no portal has a base_url configured; pass --simulate to use simulated portals");
    }
    Ok(registry)
}
