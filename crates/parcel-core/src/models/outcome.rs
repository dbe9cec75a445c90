use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::record::CanonicalPropertyRecord;
use super::source::SourceId;

/// Source-specific JSON object exactly as a portal returned it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawPayload(serde_json::Value);

impl RawPayload {
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }

    pub fn into_value(self) -> serde_json::Value {
        self.0
    }
}

impl From<serde_json::Value> for RawPayload {
    fn from(value: serde_json::Value) -> Self {
        Self(value)
    }
}

/// What a portal client hands back for one query. Clients never fail:
/// every transport or service problem is folded into `Unavailable`.
#[derive(Debug, Clone, PartialEq)]
pub enum PortalResponse {
    Found(RawPayload),
    NotFound { message: Option<String> },
    Unavailable { reason: String },
}

/// Final state of one portal's slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OutcomeStatus {
    Found,
    NotFound,
    Unavailable,
    Error,
}

impl OutcomeStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Found => "found",
            Self::NotFound => "notFound",
            Self::Unavailable => "unavailable",
            Self::Error => "error",
        }
    }

    /// Unavailable and error outcomes count as degraded sources.
    pub fn is_degraded(self) -> bool {
        matches!(self, Self::Unavailable | Self::Error)
    }
}

/// Settled result of querying one selected portal.
///
/// The payload and canonical record are present exactly when the status is
/// `Found`; the constructors are the only way to build an outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct PortalOutcome {
    source: SourceId,
    status: OutcomeStatus,
    raw_payload: Option<RawPayload>,
    record: Option<CanonicalPropertyRecord>,
    latency: Duration,
    error_detail: Option<String>,
}

impl PortalOutcome {
    pub fn found(
        source: SourceId,
        raw_payload: RawPayload,
        record: CanonicalPropertyRecord,
        latency: Duration,
    ) -> Self {
        Self {
            source,
            status: OutcomeStatus::Found,
            raw_payload: Some(raw_payload),
            record: Some(record),
            latency,
            error_detail: None,
        }
    }

    pub fn not_found(source: SourceId, message: Option<String>, latency: Duration) -> Self {
        Self {
            source,
            status: OutcomeStatus::NotFound,
            raw_payload: None,
            record: None,
            latency,
            error_detail: message,
        }
    }

    pub fn unavailable(source: SourceId, detail: impl Into<String>, latency: Duration) -> Self {
        Self {
            source,
            status: OutcomeStatus::Unavailable,
            raw_payload: None,
            record: None,
            latency,
            error_detail: Some(detail.into()),
        }
    }

    pub fn error(source: SourceId, detail: impl Into<String>, latency: Duration) -> Self {
        Self {
            source,
            status: OutcomeStatus::Error,
            raw_payload: None,
            record: None,
            latency,
            error_detail: Some(detail.into()),
        }
    }

    pub fn source(&self) -> SourceId {
        self.source
    }

    pub fn status(&self) -> OutcomeStatus {
        self.status
    }

    pub fn raw_payload(&self) -> Option<&RawPayload> {
        self.raw_payload.as_ref()
    }

    pub fn record(&self) -> Option<&CanonicalPropertyRecord> {
        self.record.as_ref()
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    pub fn error_detail(&self) -> Option<&str> {
        self.error_detail.as_deref()
    }

    pub fn is_found(&self) -> bool {
        self.status == OutcomeStatus::Found
    }
}
