// Single source of truth for all default values.

use crate::models::SourceId;

// --- Portals ---
pub const DEFAULT_PORTAL_ENABLED: bool = true;
pub const DEFAULT_PORTAL_TIMEOUT_MS: u64 = 15_000;

// --- Routing ---
pub const DEFAULT_SOURCE_ORDER: [SourceId; 4] = SourceId::ALL;
pub const DEFAULT_RURAL_PREFERRED: SourceId = SourceId::Dlr;
pub const DEFAULT_STATE_AFFINITY: &[(&str, SourceId)] = &[("delhi", SourceId::Doris)];

// --- Merge ---
pub const DEFAULT_MERGE_PRIORITY: [SourceId; 4] = [
    SourceId::Cersai,
    SourceId::Doris,
    SourceId::Dlr,
    SourceId::Mca21,
];

// --- Trust ---
pub const DEFAULT_TRUST_DORIS: u8 = 85;
pub const DEFAULT_TRUST_DLR: u8 = 80;
pub const DEFAULT_TRUST_CERSAI: u8 = 90;
pub const DEFAULT_TRUST_MCA21: u8 = 75;

/// Built-in trust score for a source.
pub const fn default_trust(source: SourceId) -> u8 {
    match source {
        SourceId::Doris => DEFAULT_TRUST_DORIS,
        SourceId::Dlr => DEFAULT_TRUST_DLR,
        SourceId::Cersai => DEFAULT_TRUST_CERSAI,
        SourceId::Mca21 => DEFAULT_TRUST_MCA21,
    }
}

// --- Normalization ---
pub const DEFAULT_COORDINATE_JITTER: bool = false;
pub const DEFAULT_JITTER_DEGREES: f64 = 0.01;

// --- Aggregation ---
pub const DEFAULT_PER_CALL_TIMEOUT_MS: u64 = 5_000;

// --- Simulation ---
pub const DEFAULT_UNAVAILABLE_RATE: f64 = 0.1;
pub const DEFAULT_NOT_FOUND_RATE: f64 = 0.2;
pub const DEFAULT_MIN_LATENCY_MS: u64 = 500;
pub const DEFAULT_MAX_LATENCY_MS: u64 = 1_500;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
