use std::collections::BTreeMap;
use std::sync::Arc;

use parcel_core::config::{PortalsConfig, SimulationConfig};
use parcel_core::errors::PortalError;
use parcel_core::models::SourceId;
use parcel_core::traits::PortalClient;

use crate::simulated::{FaultInjector, SeededFaults, SimulatedPortal};
use crate::transport::http_client::HttpPortalClient;

/// The set of portals a search may reach, one client per source.
#[derive(Clone, Default)]
pub struct PortalRegistry {
    clients: BTreeMap<SourceId, Arc<dyn PortalClient>>,
}

impl PortalRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// HTTP clients for every enabled portal with a configured base URL.
    /// Enabled portals without a URL are left unregistered.
    pub fn from_config(config: &PortalsConfig) -> Result<Self, PortalError> {
        let mut registry = Self::new();
        for source in config.enabled_sources() {
            match HttpPortalClient::from_endpoint(source, &config.endpoint(source))? {
                Some(client) => registry = registry.with_client(Arc::new(client)),
                None => tracing::warn!(source = %source, "portal enabled without base_url, skipping"),
            }
        }
        Ok(registry)
    }

    /// Simulated clients for every enabled portal, sharing one fault injector.
    pub fn simulated(portals: &PortalsConfig, simulation: &SimulationConfig) -> Self {
        let faults: Arc<dyn FaultInjector> = Arc::new(SeededFaults::new(simulation));
        Self::simulated_with(&portals.enabled_sources(), faults)
    }

    pub fn simulated_with(sources: &[SourceId], faults: Arc<dyn FaultInjector>) -> Self {
        sources.iter().fold(Self::new(), |registry, source| {
            registry.with_client(Arc::new(SimulatedPortal::new(*source, Arc::clone(&faults))))
        })
    }

    /// Register a client under its own source, replacing any previous one.
    pub fn with_client(mut self, client: Arc<dyn PortalClient>) -> Self {
        self.clients.insert(client.source(), client);
        self
    }

    pub fn get(&self, source: SourceId) -> Option<&Arc<dyn PortalClient>> {
        self.clients.get(&source)
    }

    pub fn contains(&self, source: SourceId) -> bool {
        self.clients.contains_key(&source)
    }

    /// Registered sources in [`SourceId`] order.
    pub fn sources(&self) -> Vec<SourceId> {
        self.clients.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }
}

impl std::fmt::Debug for PortalRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PortalRegistry")
            .field("sources", &self.sources())
            .finish()
    }
}
