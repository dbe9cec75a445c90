//! Concurrent fan-out over the selected portals.
//!
//! Every selected source gets a pre-allocated write-once slot and its own
//! task. A task queries its portal under the per-call timeout, normalizes a
//! found payload and writes the slot exactly once. The join waits for every
//! task to settle, so one slow or failing portal never affects the others'
//! outcomes, and the result order is the selection order regardless of which
//! portal answered first.

use std::future::Future;
use std::sync::{Arc, OnceLock};
use std::time::Duration;

use futures::future::join_all;
use parcel_core::models::{PortalOutcome, PortalResponse, SearchQuery, SourceId};
use parcel_core::traits::PortalClient;
use parcel_normalize::Normalizer;
use parcel_observability::tracing_setup::events;
use parcel_portals::PortalRegistry;
use tokio::time::Instant;
use tracing::Instrument;

/// Error detail of a slot finalized by cancellation.
pub const CANCELLED_DETAIL: &str = "cancelled";

type Slots = Arc<[OnceLock<PortalOutcome>]>;

#[derive(Debug, Clone)]
pub struct AggregationCoordinator {
    registry: PortalRegistry,
    normalizer: Arc<Normalizer>,
    per_call_timeout: Duration,
}

impl AggregationCoordinator {
    pub fn new(registry: PortalRegistry, normalizer: Normalizer, per_call_timeout: Duration) -> Self {
        Self {
            registry,
            normalizer: Arc::new(normalizer),
            per_call_timeout,
        }
    }

    pub fn registry(&self) -> &PortalRegistry {
        &self.registry
    }

    pub fn per_call_timeout(&self) -> Duration {
        self.per_call_timeout
    }

    /// Query every source and return one outcome per source, in order.
    pub async fn run(&self, query: Arc<SearchQuery>, sources: &[SourceId]) -> Vec<PortalOutcome> {
        self.run_until(query, sources, std::future::pending()).await
    }

    /// Like [`AggregationCoordinator::run`], but stops early when `cancel`
    /// resolves. In-flight calls are aborted and their slots finalized as
    /// unavailable with detail "cancelled"; slots already settled keep their
    /// outcome.
    pub async fn run_until<C>(
        &self,
        query: Arc<SearchQuery>,
        sources: &[SourceId],
        cancel: C,
    ) -> Vec<PortalOutcome>
    where
        C: Future<Output = ()>,
    {
        let started = Instant::now();
        let slots: Slots = sources.iter().map(|_| OnceLock::new()).collect();

        let mut tasks = Vec::with_capacity(sources.len());
        for (index, source) in sources.iter().copied().enumerate() {
            let Some(client) = self.registry.get(source).cloned() else {
                let _ = slots[index].set(PortalOutcome::error(
                    source,
                    format!("{source} is not registered"),
                    Duration::ZERO,
                ));
                continue;
            };

            let slots = Arc::clone(&slots);
            let query = Arc::clone(&query);
            let normalizer = Arc::clone(&self.normalizer);
            let timeout = self.per_call_timeout;
            let span = parcel_observability::portal_span!(source);

            let handle = tokio::spawn(
                async move {
                    let outcome = call_portal(client.as_ref(), &query, &normalizer, timeout).await;
                    let _ = slots[index].set(outcome);
                }
                .instrument(span),
            );
            tasks.push((index, source, handle));
        }

        let aborts: Vec<_> = tasks.iter().map(|(_, _, h)| h.abort_handle()).collect();
        let settled = {
            let mut join = std::pin::pin!(join_all(tasks.iter_mut().map(|(_, _, h)| h)));
            tokio::select! {
                settled = &mut join => settled,
                () = cancel => {
                    let in_flight = aborts.iter().filter(|a| !a.is_finished()).count();
                    tracing::debug!(in_flight, "search cancelled");
                    for abort in &aborts {
                        abort.abort();
                    }
                    join.await
                }
            }
        };

        let elapsed = started.elapsed();
        for ((index, source, _), result) in tasks.iter().zip(settled) {
            let Err(e) = result else { continue };
            let outcome = if e.is_panic() {
                PortalOutcome::error(*source, "portal task panicked", elapsed)
            } else {
                PortalOutcome::unavailable(*source, CANCELLED_DETAIL, elapsed)
            };
            // A task that finished just before the abort keeps its outcome.
            let _ = slots[*index].set(outcome);
        }

        slots
            .iter()
            .zip(sources)
            .map(|(slot, source)| {
                slot.get().cloned().unwrap_or_else(|| {
                    PortalOutcome::error(*source, "portal task did not settle", elapsed)
                })
            })
            .collect()
    }
}

/// Query one portal and turn its response into an outcome. Never fails.
async fn call_portal(
    client: &dyn PortalClient,
    query: &SearchQuery,
    normalizer: &Normalizer,
    timeout: Duration,
) -> PortalOutcome {
    let source = client.source();
    let started = Instant::now();
    let response = tokio::time::timeout(timeout, client.search(query)).await;
    let latency = started.elapsed();

    let outcome = match response {
        Err(_) => PortalOutcome::unavailable(
            source,
            format!("timed out after {} ms", timeout.as_millis()),
            latency,
        ),
        Ok(PortalResponse::Found(raw)) => match normalizer.try_normalize(source, &raw) {
            Ok(record) => PortalOutcome::found(source, raw, record, latency),
            Err(e) => {
                events::normalization_failed(source, &e.to_string());
                PortalOutcome::error(source, e.to_string(), latency)
            }
        },
        Ok(PortalResponse::NotFound { message }) => PortalOutcome::not_found(source, message, latency),
        Ok(PortalResponse::Unavailable { reason }) => PortalOutcome::unavailable(source, reason, latency),
    };

    events::portal_settled(source, outcome.status(), latency.as_millis() as u64);
    outcome
}
