//! # parcel-core
//!
//! Foundation crate for the parcel property-search pipeline.
//! Defines the query, outcome, canonical record and unified view models,
//! the `PortalClient` seam, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::ParcelConfig;
pub use errors::{ParcelError, ParcelResult};
pub use models::{
    CanonicalPropertyRecord, Encumbrance, EncumbranceStatus, OutcomeStatus, PortalOutcome,
    PortalResponse, PortalSelector, PropertyType, RawPayload, SearchQuery, SourceId, TrustScore,
    UnifiedView,
};
pub use traits::{CoordinateAdjuster, PortalClient};
