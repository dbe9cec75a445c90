use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::SourceId;

/// Connection settings for one portal backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortalEndpointConfig {
    /// Endpoint the query is POSTed to. `None` leaves the portal without an
    /// HTTP client.
    pub base_url: Option<String>,
    /// Whether the portal takes part in searches.
    pub enabled: bool,
    /// Client-side request timeout in milliseconds.
    pub timeout_ms: u64,
}

impl Default for PortalEndpointConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            enabled: defaults::DEFAULT_PORTAL_ENABLED,
            timeout_ms: defaults::DEFAULT_PORTAL_TIMEOUT_MS,
        }
    }
}

/// Per-portal endpoint table. Portals missing from the table use defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PortalsConfig {
    pub endpoints: BTreeMap<SourceId, PortalEndpointConfig>,
}

impl PortalsConfig {
    /// Settings for one portal, falling back to defaults.
    pub fn endpoint(&self, source: SourceId) -> PortalEndpointConfig {
        self.endpoints.get(&source).cloned().unwrap_or_default()
    }

    /// Enabled portals in declaration order of [`SourceId::ALL`].
    pub fn enabled_sources(&self) -> Vec<SourceId> {
        SourceId::ALL
            .into_iter()
            .filter(|s| self.endpoint(*s).enabled)
            .collect()
    }
}
