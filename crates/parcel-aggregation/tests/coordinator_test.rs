mod common;

use std::sync::Arc;

use common::*;
use parcel_aggregation::coordinator::CANCELLED_DETAIL;
use parcel_aggregation::{AggregationCoordinator, SearchEngine};
use parcel_core::config::ParcelConfig;
use parcel_core::models::{OutcomeStatus, SourceId};
use parcel_core::traits::PortalClient;
use parcel_normalize::Normalizer;

fn coordinator(clients: Vec<Arc<dyn PortalClient>>) -> AggregationCoordinator {
    AggregationCoordinator::new(registry(clients), Normalizer::default(), ms(5_000))
}

#[tokio::test(start_paused = true)]
async fn calls_run_concurrently() {
    let clients: Vec<Arc<dyn PortalClient>> = SourceId::ALL
        .into_iter()
        .map(|s| Arc::new(StubPortal::found(s, ms(1_000))) as Arc<dyn PortalClient>)
        .collect();
    let started = tokio::time::Instant::now();
    let outcomes = coordinator(clients)
        .run(Arc::new(urban_query()), &SourceId::ALL)
        .await;
    assert_eq!(outcomes.len(), 4);
    // Sequential calls would take four seconds.
    assert!(started.elapsed() < ms(1_500));
}

#[tokio::test(start_paused = true)]
async fn cancellation_finalizes_pending_slots() {
    let clients: Vec<Arc<dyn PortalClient>> = vec![
        Arc::new(StubPortal::found(SourceId::Doris, ms(50))),
        Arc::new(StubPortal::found(SourceId::Dlr, ms(2_000))),
        Arc::new(StubPortal::found(SourceId::Cersai, ms(3_000))),
    ];
    let sources = [SourceId::Doris, SourceId::Dlr, SourceId::Cersai];

    let outcomes = coordinator(clients)
        .run_until(
            Arc::new(urban_query()),
            &sources,
            tokio::time::sleep(ms(500)),
        )
        .await;

    assert_eq!(outcomes.len(), 3);
    assert_eq!(outcomes[0].status(), OutcomeStatus::Found);
    for outcome in &outcomes[1..] {
        assert_eq!(outcome.status(), OutcomeStatus::Unavailable);
        assert_eq!(outcome.error_detail(), Some(CANCELLED_DETAIL));
        assert!(outcome.record().is_none());
    }
}

#[tokio::test(start_paused = true)]
async fn cancellation_through_engine_still_merges_settled_sources() {
    let clients: Vec<Arc<dyn PortalClient>> = vec![
        Arc::new(StubPortal::found(SourceId::Dlr, ms(10))),
        Arc::new(StubPortal::found(SourceId::Cersai, ms(10_000))),
    ];
    let engine = SearchEngine::new(&ParcelConfig::default(), registry(clients));

    let (tx, rx) = tokio::sync::oneshot::channel::<()>();
    tokio::spawn(async move {
        tokio::time::sleep(ms(100)).await;
        let _ = tx.send(());
    });

    let response = engine
        .search_until(&urban_query(), async {
            let _ = rx.await;
        })
        .await
        .unwrap();

    let cersai = response.results.iter().find(|r| r.source == SourceId::Cersai).unwrap();
    assert_eq!(cersai.message.as_deref(), Some("cancelled"));
    assert_eq!(response.unified_view.unwrap().primary_source, SourceId::Dlr);
}

#[tokio::test(start_paused = true)]
async fn found_payloads_carry_canonical_records() {
    let clients: Vec<Arc<dyn PortalClient>> =
        vec![Arc::new(StubPortal::found(SourceId::Cersai, ms(10)))];
    let outcomes = coordinator(clients)
        .run(Arc::new(urban_query()), &[SourceId::Cersai])
        .await;
    let outcome = &outcomes[0];
    assert!(outcome.is_found());
    assert!(outcome.raw_payload().is_some());
    assert_eq!(outcome.record().unwrap().source_portal, SourceId::Cersai);
    assert_eq!(outcome.error_detail(), None);
}

#[tokio::test(start_paused = true)]
async fn empty_selection_yields_empty_outcomes() {
    let outcomes = coordinator(vec![]).run(Arc::new(urban_query()), &[]).await;
    assert!(outcomes.is_empty());
}
