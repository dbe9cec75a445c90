//! # parcel-normalize
//!
//! Maps each portal's idiosyncratic payload into the canonical property
//! record. Raw JSON is decoded into [`PortalPayload`], a union with one
//! variant per portal, and each variant carries its own explicit mapping.
//! Normalization is pure: the same payload always yields the same record.

pub mod classify;
pub mod coordinates;
pub mod dates;
pub mod money;
pub mod normalizer;
pub mod payload;

pub use coordinates::{HashJitter, Identity};
pub use normalizer::Normalizer;
pub use payload::PortalPayload;
