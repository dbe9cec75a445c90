use async_trait::async_trait;

use crate::models::{PortalResponse, SearchQuery, SourceId};

/// One external record portal.
///
/// Implementations are constructed explicitly per source and handed to the
/// coordinator; there is no process-wide client. A call must resolve to one
/// of found / not found / unavailable and must not retry: retry policy, if
/// any, belongs to the caller.
#[async_trait]
pub trait PortalClient: Send + Sync {
    /// The portal this client talks to.
    fn source(&self) -> SourceId;

    /// Query the portal. Transport failures, service errors and client-side
    /// timeouts all come back as [`PortalResponse::Unavailable`].
    async fn search(&self, query: &SearchQuery) -> PortalResponse;
}
