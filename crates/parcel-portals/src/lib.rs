//! # parcel-portals
//!
//! [`PortalClient`] implementations and the registry that maps each source to
//! its client. Every client is constructed explicitly for one source; there
//! is no shared global client.
//!
//! - [`HttpPortalClient`] POSTs the query to a portal endpoint.
//! - [`SimulatedPortal`] generates demo payloads with injectable faults.
//!
//! [`PortalClient`]: parcel_core::traits::PortalClient

pub mod registry;
pub mod simulated;
pub mod transport;

pub use registry::PortalRegistry;
pub use simulated::{FaultInjector, FaultPlan, PlannedOutcome, ScriptedFaults, SeededFaults, SimulatedPortal};
pub use transport::http_client::HttpPortalClient;
