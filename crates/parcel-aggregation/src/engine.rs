use std::future::Future;
use std::sync::Arc;

use chrono::Utc;
use parcel_core::config::{ParcelConfig, RoutingConfig};
use parcel_core::errors::ParcelError;
use parcel_core::models::{OutcomeStatus, SearchQuery};
use parcel_merge::{merge, MergePriority};
use parcel_normalize::Normalizer;
use parcel_observability::tracing_setup::events;
use parcel_observability::DegradationTracker;
use parcel_portals::PortalRegistry;
use parking_lot::Mutex;
use tracing::Instrument;

use crate::coordinator::AggregationCoordinator;
use crate::response::SearchResponse;
use crate::selection::select_sources;
use crate::validation::validate;

/// Entry point of the pipeline: validate, fan out, merge, score.
pub struct SearchEngine {
    coordinator: AggregationCoordinator,
    routing: RoutingConfig,
    priority: MergePriority,
    degradation: Mutex<DegradationTracker>,
}

impl SearchEngine {
    /// Build an engine over `registry` using the routing, merge, trust,
    /// normalization and timeout settings of `config`.
    pub fn new(config: &ParcelConfig, registry: PortalRegistry) -> Self {
        Self::with_normalizer(config, registry, Normalizer::from_config(config))
    }

    pub fn with_normalizer(config: &ParcelConfig, registry: PortalRegistry, normalizer: Normalizer) -> Self {
        Self {
            coordinator: AggregationCoordinator::new(
                registry,
                normalizer,
                config.aggregation.per_call_timeout(),
            ),
            routing: config.routing.clone(),
            priority: MergePriority::from_config(&config.merge),
            degradation: Mutex::new(DegradationTracker::new()),
        }
    }

    pub fn registry(&self) -> &PortalRegistry {
        self.coordinator.registry()
    }

    /// Run one search to completion.
    pub async fn search(&self, query: &SearchQuery) -> Result<SearchResponse, ParcelError> {
        self.search_until(query, std::future::pending()).await
    }

    /// Run one search, stopping the portal calls still in flight when
    /// `cancel` resolves. Cancelled sources are reported as unavailable.
    ///
    /// Only a validation failure is returned as an error, and it is returned
    /// before any portal is contacted.
    pub async fn search_until<C>(&self, query: &SearchQuery, cancel: C) -> Result<SearchResponse, ParcelError>
    where
        C: Future<Output = ()>,
    {
        let registry = self.coordinator.registry();
        let sources = validate(query, registry)
            .and_then(|()| select_sources(query, &self.routing, &registry.sources()))
            .inspect_err(|e| events::validation_rejected(&e.to_string()))?;

        let search_id = uuid::Uuid::new_v4();
        let span = parcel_observability::search_span!(search_id, sources.len());
        let query = Arc::new(query.clone());

        let outcomes = self
            .coordinator
            .run_until(query, &sources, cancel)
            .instrument(span.clone())
            .await;

        let _entered = span.enter();
        {
            let mut tracker = self.degradation.lock();
            for outcome in &outcomes {
                match outcome.status() {
                    OutcomeStatus::Found | OutcomeStatus::NotFound => tracker.mark_recovered(outcome.source()),
                    status => tracker.record(outcome.source(), status, outcome.error_detail().unwrap_or_default()),
                }
            }
        }

        let unified_view = merge(&outcomes, &self.priority, Utc::now());
        let risk_assessment = unified_view.as_ref().map(parcel_risk::score);

        let response = SearchResponse::new(Utc::now(), outcomes, unified_view, risk_assessment);
        events::search_completed(
            sources.len(),
            response.found_count(),
            response.degraded_count(),
            response.unified_view.as_ref().map(|v| v.primary_source),
        );
        Ok(response)
    }

    /// Snapshot of portal degradations seen across searches.
    pub fn degradation(&self) -> DegradationTracker {
        self.degradation.lock().clone()
    }
}

impl std::fmt::Debug for SearchEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchEngine")
            .field("coordinator", &self.coordinator)
            .field("routing", &self.routing)
            .field("priority", &self.priority)
            .finish_non_exhaustive()
    }
}
