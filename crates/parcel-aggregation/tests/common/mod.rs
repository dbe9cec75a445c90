#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parcel_core::models::{PortalResponse, SearchQuery, SourceId};
use parcel_core::traits::PortalClient;
use parcel_portals::PortalRegistry;
use test_fixtures::portal_payload;

/// Portal double with a fixed response and delay that counts its calls.
pub struct StubPortal {
    source: SourceId,
    delay: Duration,
    response: PortalResponse,
    calls: Arc<AtomicUsize>,
}

impl StubPortal {
    pub fn found(source: SourceId, delay: Duration) -> Self {
        Self::new(source, delay, PortalResponse::Found(portal_payload(source)))
    }

    pub fn new(source: SourceId, delay: Duration, response: PortalResponse) -> Self {
        Self {
            source,
            delay,
            response,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl PortalClient for StubPortal {
    fn source(&self) -> SourceId {
        self.source
    }

    async fn search(&self, _query: &SearchQuery) -> PortalResponse {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
        self.response.clone()
    }
}

/// Portal double that panics mid-call.
pub struct PanickingPortal(pub SourceId);

#[async_trait]
impl PortalClient for PanickingPortal {
    fn source(&self) -> SourceId {
        self.0
    }

    async fn search(&self, _query: &SearchQuery) -> PortalResponse {
        tokio::time::sleep(Duration::from_millis(5)).await;
        panic!("portal double exploded");
    }
}

pub fn registry(clients: Vec<Arc<dyn PortalClient>>) -> PortalRegistry {
    clients
        .into_iter()
        .fold(PortalRegistry::new(), |registry, client| registry.with_client(client))
}

pub fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

pub fn urban_query() -> SearchQuery {
    SearchQuery::new("Rajesh Kumar", "110017")
        .with_property_id("DL-SD-2022-004417")
        .with_address("B-42, Saket", "South Delhi", "Delhi")
}

pub fn total_calls(counters: &[Arc<AtomicUsize>]) -> usize {
    counters.iter().map(|c| c.load(Ordering::SeqCst)).sum()
}
