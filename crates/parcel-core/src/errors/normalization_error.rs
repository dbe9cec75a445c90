/// Reasons a found payload could not be mapped to the canonical record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NormalizationError {
    #[error("unknown source: {source_id}")]
    UnknownSource { source_id: String },

    #[error("malformed {source_id} payload: {reason}")]
    MalformedPayload { source_id: String, reason: String },

    #[error("{source_id} payload is missing mandatory field `{field}`")]
    MissingField {
        source_id: String,
        field: &'static str,
    },
}
