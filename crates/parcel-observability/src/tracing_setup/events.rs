//! Structured log events for the search pipeline.
//!
//! Each function emits a `tracing` event with structured fields.

use parcel_core::models::{OutcomeStatus, SourceId};

/// Log a portal call settling.
pub fn portal_settled(source: SourceId, status: OutcomeStatus, latency_ms: u64) {
    tracing::info!(
        event = "portal_settled",
        source = %source,
        status = status.as_str(),
        latency_ms = latency_ms,
        "portal settled"
    );
}

/// Log a portal coming back unavailable or in error.
pub fn portal_degraded(source: SourceId, status: OutcomeStatus, detail: &str) {
    tracing::warn!(
        event = "portal_degraded",
        source = %source,
        status = status.as_str(),
        detail = %detail,
        "portal degraded"
    );
}

/// Log a found payload that could not be mapped to a record.
pub fn normalization_failed(source: SourceId, reason: &str) {
    tracing::warn!(
        event = "normalization_failed",
        source = %source,
        reason = %reason,
        "normalization failed"
    );
}

/// Log a query rejected before any portal was called.
pub fn validation_rejected(reason: &str) {
    tracing::info!(
        event = "validation_rejected",
        reason = %reason,
        "query rejected"
    );
}

/// Log a completed search.
pub fn search_completed(selected: usize, found: usize, degraded: usize, primary: Option<SourceId>) {
    tracing::info!(
        event = "search_completed",
        selected = selected,
        found = found,
        degraded = degraded,
        primary = ?primary,
        "search completed"
    );
}
