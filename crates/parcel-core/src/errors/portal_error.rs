/// Failures talking to one portal. Never escalated past the portal client:
/// every variant becomes an `unavailable` outcome for that source.
#[derive(Debug, thiserror::Error)]
pub enum PortalError {
    #[error("transport failure for {source_id}: {reason}")]
    Transport { source_id: String, reason: String },

    #[error("{source_id} timed out after {after_ms} ms")]
    Timeout { source_id: String, after_ms: u64 },

    #[error("{source_id} returned HTTP {status}: {message}")]
    Service {
        source_id: String,
        status: u16,
        message: String,
    },

    #[error("could not decode {source_id} response: {reason}")]
    Decode { source_id: String, reason: String },
}
