//! Portal degradation tracking.

pub mod tracker;

pub use tracker::{DegradationTracker, PortalDegradation, RecoveryStatus};
