use chrono::{DateTime, Utc};
use parcel_core::models::{CanonicalPropertyRecord, OutcomeStatus, PortalOutcome, SourceId, UnifiedView};
use parcel_risk::RiskAssessment;
use serde::{Deserialize, Serialize};

/// Per-source entry of a search response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceResult {
    pub source: SourceId,
    pub status: OutcomeStatus,
    /// Canonical record mapped from the portal's payload. Null unless found.
    pub data: Option<CanonicalPropertyRecord>,
    /// Payload exactly as the portal returned it. Omitted unless found.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_data: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub latency_ms: u64,
}

impl From<&PortalOutcome> for SourceResult {
    fn from(outcome: &PortalOutcome) -> Self {
        Self {
            source: outcome.source(),
            status: outcome.status(),
            data: outcome.record().cloned(),
            raw_data: outcome.raw_payload().map(|raw| raw.as_value().clone()),
            message: outcome.error_detail().map(str::to_string),
            latency_ms: outcome.latency().as_millis() as u64,
        }
    }
}

/// Everything one search produced.
///
/// Serialize-only: the settled outcomes stay in process and are not part of
/// the wire shape. Callers reading a response back use [`SourceResult`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub timestamp: DateTime<Utc>,
    pub results: Vec<SourceResult>,
    /// Null when no portal found a match.
    pub unified_view: Option<UnifiedView>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_assessment: Option<RiskAssessment>,
    #[serde(skip)]
    outcomes: Vec<PortalOutcome>,
}

impl SearchResponse {
    pub fn new(
        timestamp: DateTime<Utc>,
        outcomes: Vec<PortalOutcome>,
        unified_view: Option<UnifiedView>,
        risk_assessment: Option<RiskAssessment>,
    ) -> Self {
        Self {
            timestamp,
            results: outcomes.iter().map(SourceResult::from).collect(),
            unified_view,
            risk_assessment,
            outcomes,
        }
    }

    /// Settled outcomes with their canonical records, in selection order.
    pub fn outcomes(&self) -> &[PortalOutcome] {
        &self.outcomes
    }

    pub fn found_count(&self) -> usize {
        self.results
            .iter()
            .filter(|r| r.status == OutcomeStatus::Found)
            .count()
    }

    pub fn degraded_count(&self) -> usize {
        self.results.iter().filter(|r| r.status.is_degraded()).count()
    }
}
