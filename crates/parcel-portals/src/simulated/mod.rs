//! Simulated portals for demos and tests.
//!
//! A [`SimulatedPortal`] asks its [`FaultInjector`] how the call should go,
//! sleeps for the planned latency and then answers with a payload shaped like
//! the real portal's API.

mod faults;
mod mock_payloads;

use std::sync::Arc;

use async_trait::async_trait;
use parcel_core::models::{PortalResponse, RawPayload, SearchQuery, SourceId};
use parcel_core::traits::PortalClient;

pub use faults::{FaultInjector, FaultPlan, PlannedOutcome, ScriptedFaults, SeededFaults};
pub use mock_payloads::mock_payload;

#[derive(Debug, Clone)]
pub struct SimulatedPortal {
    source: SourceId,
    faults: Arc<dyn FaultInjector>,
}

impl SimulatedPortal {
    pub fn new(source: SourceId, faults: Arc<dyn FaultInjector>) -> Self {
        Self { source, faults }
    }
}

#[async_trait]
impl PortalClient for SimulatedPortal {
    fn source(&self) -> SourceId {
        self.source
    }

    async fn search(&self, query: &SearchQuery) -> PortalResponse {
        let plan = self.faults.plan(self.source);
        if !plan.latency.is_zero() {
            tokio::time::sleep(plan.latency).await;
        }

        match plan.outcome {
            PlannedOutcome::Found => {
                PortalResponse::Found(RawPayload::new(mock_payload(self.source, query, plan.variant)))
            }
            PlannedOutcome::NotFound => PortalResponse::NotFound {
                message: Some(not_found_message(self.source).to_string()),
            },
            PlannedOutcome::Unavailable => PortalResponse::Unavailable {
                reason: format!("{} service unavailable", self.source.display_name()),
            },
        }
    }
}

fn not_found_message(source: SourceId) -> &'static str {
    match source {
        SourceId::Doris => "No property records found with the given details",
        SourceId::Dlr => "No land records found with the given details",
        SourceId::Cersai => "No security interest records found with the given details",
        SourceId::Mca21 => "No company property records found with the given details",
    }
}
