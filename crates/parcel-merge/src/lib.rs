//! # parcel-merge
//!
//! Combines the found outcomes of one search into a [`UnifiedView`].
//! The most authoritative source supplies every scalar field; encumbrances
//! and documents are unioned across sources with their origin attached.
//!
//! [`UnifiedView`]: parcel_core::models::UnifiedView

pub mod merger;
pub mod priority;

pub use merger::merge;
pub use priority::MergePriority;
