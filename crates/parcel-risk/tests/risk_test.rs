use std::time::Duration;

use chrono::Utc;
use parcel_core::models::{PortalOutcome, SourceId, TrustScore};
use parcel_merge::{merge, MergePriority};
use parcel_normalize::Normalizer;
use parcel_risk::{score, RiskLevel};
use proptest::prelude::*;
use test_fixtures::portal_payload;

fn record(source: SourceId) -> parcel_core::CanonicalPropertyRecord {
    Normalizer::default()
        .normalize(source, &portal_payload(source))
        .unwrap()
}

#[test]
fn doris_fixture_record() {
    // trust 85, active mortgage, legal status Clear
    let a = score(&record(SourceId::Doris));
    assert_eq!(a.title_risk, 15);
    assert_eq!(a.financial_risk, 65);
    assert_eq!(a.legal_risk, 15);
    // 6 + 19.5 + 4.5 = 30
    assert_eq!(a.overall_risk, 30);
    assert_eq!(a.level, RiskLevel::Moderate);
}

#[test]
fn unified_view_considers_every_sources_charges() {
    let mut cersai = record(SourceId::Cersai);
    for e in &mut cersai.encumbrances {
        e.status = parcel_core::EncumbranceStatus::Discharged;
    }
    cersai.legal_status = Some("Clear".to_string());
    let raw = portal_payload(SourceId::Cersai);

    let alone = vec![PortalOutcome::found(SourceId::Cersai, raw.clone(), cersai.clone(), Duration::ZERO)];
    let view = merge(&alone, &MergePriority::default(), Utc::now()).unwrap();
    let a = score(&view);
    assert_eq!(a.financial_risk, 25);
    assert_eq!(a.overall_risk, 16);

    let with_dlr = vec![
        PortalOutcome::found(SourceId::Cersai, raw, cersai, Duration::ZERO),
        PortalOutcome::found(
            SourceId::Dlr,
            portal_payload(SourceId::Dlr),
            record(SourceId::Dlr),
            Duration::ZERO,
        ),
    ];
    let view = merge(&with_dlr, &MergePriority::default(), Utc::now()).unwrap();
    assert_eq!(view.primary_source, SourceId::Cersai);
    assert_eq!(score(&view).financial_risk, 65);
}

#[test]
fn assessment_serializes_in_camel_case() {
    let json = serde_json::to_value(score(&record(SourceId::Mca21))).unwrap();
    assert!(json.get("overallRisk").is_some());
    assert!(json.get("titleRisk").is_some());
    assert!(json["level"].is_string());
}

proptest! {
    #[test]
    fn scores_stay_in_range(trust in 0u8..=100, clear in any::<bool>()) {
        let mut r = record(SourceId::Doris);
        r.trustworthiness_score = TrustScore::new(trust);
        r.legal_status = clear.then(|| "Clear".to_string());
        let a = score(&r);
        prop_assert!(a.overall_risk <= 100);
        prop_assert_eq!(a.title_risk, 100 - trust);
        prop_assert_eq!(a.level, RiskLevel::from_score(a.overall_risk));
    }
}
