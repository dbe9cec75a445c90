use parcel_core::models::{OutcomeStatus, SourceId};
use parcel_observability::tracing_setup::{events, spans};
use parcel_observability::{DegradationTracker, RecoveryStatus};

#[test]
fn tracker_records_and_recovers() {
    let mut tracker = DegradationTracker::new();
    tracker.record(SourceId::Dlr, OutcomeStatus::Unavailable, "timed out after 5000 ms");
    tracker.record(SourceId::Dlr, OutcomeStatus::Unavailable, "DLR service unavailable");
    tracker.record(SourceId::Mca21, OutcomeStatus::Error, "missing CIN");

    assert!(tracker.is_degraded(SourceId::Dlr));
    assert_eq!(tracker.active_degradations().len(), 3);
    assert_eq!(tracker.count_recent(SourceId::Dlr, 60), 2);
    assert!(tracker.degraded_duration(SourceId::Dlr).is_some());

    tracker.mark_recovered(SourceId::Dlr);
    assert!(!tracker.is_degraded(SourceId::Dlr));
    assert!(tracker.degraded_duration(SourceId::Dlr).is_none());
    assert_eq!(tracker.active_degradations().len(), 1);
    assert!(tracker
        .events()
        .iter()
        .filter(|e| e.source == SourceId::Dlr)
        .all(|e| e.recovery_status == RecoveryStatus::Recovered && e.recovered_at.is_some()));
}

#[test]
fn degradation_serializes_in_camel_case() {
    let mut tracker = DegradationTracker::new();
    tracker.record(SourceId::Cersai, OutcomeStatus::Unavailable, "cancelled");
    let json = serde_json::to_value(&tracker.events()[0]).unwrap();
    assert_eq!(json["source"], "cersai");
    assert_eq!(json["status"], "unavailable");
    assert_eq!(json["recoveryStatus"], "active");
}

#[test]
fn events_and_spans_emit_without_subscriber() {
    parcel_observability::init_tracing_with_filter("debug");
    // A second init must not panic.
    parcel_observability::init_tracing();

    let span = parcel_observability::search_span!("search-1", 4);
    let _guard = span.enter();
    let _portal = parcel_observability::portal_span!(SourceId::Doris).entered();
    events::portal_settled(SourceId::Doris, OutcomeStatus::Found, 120);
    events::normalization_failed(SourceId::Mca21, "missing CIN");
    events::validation_rejected("pincode must be 6 digits");
    events::search_completed(4, 2, 1, Some(SourceId::Cersai));
    assert_eq!(spans::names::SEARCH, "parcel.search");
}
