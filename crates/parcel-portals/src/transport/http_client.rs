//! HTTP portal client with timeout and gzip.

use std::time::Duration;

use async_trait::async_trait;
use parcel_core::config::PortalEndpointConfig;
use parcel_core::errors::PortalError;
use parcel_core::models::{PortalResponse, RawPayload, SearchQuery, SourceId};
use parcel_core::traits::PortalClient;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};

use super::protocol::{PortalWireRequest, PortalWireResponse, WireStatus};

/// Talks to one portal backend over HTTP. Owns its own `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct HttpPortalClient {
    source: SourceId,
    endpoint: String,
    timeout: Duration,
    client: reqwest::Client,
}

impl HttpPortalClient {
    pub fn new(
        source: SourceId,
        endpoint: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, PortalError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .gzip(true)
            .build()
            .map_err(|e| PortalError::Transport {
                source_id: source.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            source,
            endpoint: endpoint.into(),
            timeout,
            client,
        })
    }

    /// Build from endpoint config. `None` when no base URL is configured.
    pub fn from_endpoint(
        source: SourceId,
        config: &PortalEndpointConfig,
    ) -> Result<Option<Self>, PortalError> {
        match &config.base_url {
            Some(url) => Self::new(source, url.clone(), Duration::from_millis(config.timeout_ms)).map(Some),
            None => Ok(None),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn fetch(&self, query: &SearchQuery) -> Result<PortalResponse, PortalError> {
        let source_id = self.source.to_string();

        let resp = self
            .client
            .post(&self.endpoint)
            .json(&PortalWireRequest::new(query))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    PortalError::Timeout {
                        source_id: source_id.clone(),
                        after_ms: self.timeout.as_millis() as u64,
                    }
                } else {
                    PortalError::Transport {
                        source_id: source_id.clone(),
                        reason: e.to_string(),
                    }
                }
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| PortalError::Transport {
            source_id: source_id.clone(),
            reason: format!("failed to read response body: {e}"),
        })?;

        if !status.is_success() {
            // Backends still send an envelope on 5xx; prefer its message.
            let message = serde_json::from_str::<PortalWireResponse>(&body)
                .ok()
                .and_then(|r| r.message)
                .unwrap_or(body);
            return Err(PortalError::Service {
                source_id,
                status: status.as_u16(),
                message,
            });
        }

        let envelope: PortalWireResponse =
            serde_json::from_str(&body).map_err(|e| PortalError::Decode {
                source_id: source_id.clone(),
                reason: e.to_string(),
            })?;

        Ok(match envelope.status {
            WireStatus::Found => match envelope.data {
                Some(data) if !data.is_null() => PortalResponse::Found(RawPayload::new(data)),
                _ => PortalResponse::Unavailable {
                    reason: format!("{source_id} reported found without data"),
                },
            },
            WireStatus::NotFound => PortalResponse::NotFound {
                message: envelope.message,
            },
            WireStatus::Unavailable | WireStatus::Error => PortalResponse::Unavailable {
                reason: envelope
                    .message
                    .unwrap_or_else(|| format!("{source_id} service unavailable")),
            },
        })
    }
}

#[async_trait]
impl PortalClient for HttpPortalClient {
    fn source(&self) -> SourceId {
        self.source
    }

    async fn search(&self, query: &SearchQuery) -> PortalResponse {
        match self.fetch(query).await {
            Ok(response) => response,
            Err(e) => {
                tracing::debug!(source = %self.source, error = %e, "portal request failed");
                PortalResponse::Unavailable {
                    reason: e.to_string(),
                }
            }
        }
    }
}
