//! # parcel-observability
//!
//! Tracing subscriber setup, span macros and structured events for the
//! search pipeline, plus a tracker that remembers which portals are
//! currently degraded.

pub mod degradation;
pub mod tracing_setup;

pub use degradation::{DegradationTracker, PortalDegradation, RecoveryStatus};
pub use tracing_setup::{init_tracing, init_tracing_from_config, init_tracing_with_filter};
