//! JSON envelopes exchanged with portal backends.

use parcel_core::models::{PropertyType, SearchQuery};
use serde::{Deserialize, Serialize};

/// Request body POSTed to a portal: the query plus the `urban` flag the
/// portal backends key their vocabulary on.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortalWireRequest<'a> {
    #[serde(flatten)]
    pub query: &'a SearchQuery,
    pub urban: bool,
}

impl<'a> PortalWireRequest<'a> {
    pub fn new(query: &'a SearchQuery) -> Self {
        Self {
            query,
            urban: query.property_type == PropertyType::Urban,
        }
    }
}

/// Status a portal reports in its envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WireStatus {
    Found,
    NotFound,
    Unavailable,
    Error,
}

/// Response envelope: `{source, status, data, message}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortalWireResponse {
    #[serde(default)]
    pub source: Option<String>,
    pub status: WireStatus,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
    #[serde(default)]
    pub message: Option<String>,
}
