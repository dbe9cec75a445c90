//! Record every portal degradation: source, status, detail, timestamp,
//! recovery status.

use chrono::{DateTime, Utc};
use parcel_core::models::{OutcomeStatus, SourceId};
use serde::{Deserialize, Serialize};

/// Recovery status of a degradation event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecoveryStatus {
    /// Still degraded.
    Active,
    /// Answered normally since.
    Recovered,
}

/// One degraded portal call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortalDegradation {
    pub source: SourceId,
    pub status: OutcomeStatus,
    pub detail: String,
    pub timestamp: DateTime<Utc>,
    pub recovery_status: RecoveryStatus,
    pub recovered_at: Option<DateTime<Utc>>,
}

/// Tracks degraded portal calls across searches.
#[derive(Debug, Clone, Default)]
pub struct DegradationTracker {
    events: Vec<PortalDegradation>,
}

impl DegradationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a degraded call.
    pub fn record(&mut self, source: SourceId, status: OutcomeStatus, detail: &str) {
        crate::tracing_setup::events::portal_degraded(source, status, detail);
        self.events.push(PortalDegradation {
            source,
            status,
            detail: detail.to_string(),
            timestamp: Utc::now(),
            recovery_status: RecoveryStatus::Active,
            recovered_at: None,
        });
    }

    /// Mark every active degradation of `source` as recovered.
    pub fn mark_recovered(&mut self, source: SourceId) {
        let now = Utc::now();
        for tracked in self
            .events
            .iter_mut()
            .filter(|t| t.source == source && t.recovery_status == RecoveryStatus::Active)
        {
            tracked.recovery_status = RecoveryStatus::Recovered;
            tracked.recovered_at = Some(now);
        }
    }

    pub fn events(&self) -> &[PortalDegradation] {
        &self.events
    }

    /// Get active (unrecovered) degradations.
    pub fn active_degradations(&self) -> Vec<&PortalDegradation> {
        self.events
            .iter()
            .filter(|t| t.recovery_status == RecoveryStatus::Active)
            .collect()
    }

    pub fn is_degraded(&self, source: SourceId) -> bool {
        self.events
            .iter()
            .any(|t| t.source == source && t.recovery_status == RecoveryStatus::Active)
    }

    /// Count events in the last N seconds for a given source.
    pub fn count_recent(&self, source: SourceId, window_secs: i64) -> usize {
        let cutoff = Utc::now() - chrono::Duration::seconds(window_secs);
        self.events
            .iter()
            .filter(|t| t.source == source && t.timestamp > cutoff)
            .count()
    }

    /// How long a source has been continuously degraded, or None if it is not.
    pub fn degraded_duration(&self, source: SourceId) -> Option<chrono::Duration> {
        let earliest = self
            .events
            .iter()
            .filter(|t| t.source == source && t.recovery_status == RecoveryStatus::Active)
            .map(|t| t.timestamp)
            .min()?;
        Some(Utc::now() - earliest)
    }
}
