use std::sync::Arc;

use parcel_core::config::TrustConfig;
use parcel_core::errors::NormalizationError;
use parcel_core::models::{
    Coordinates, EncumbranceStatus, PropertyType, RawPayload, SourceId,
};
use parcel_core::ParcelConfig;
use parcel_normalize::{HashJitter, Normalizer};
use serde_json::json;
use test_fixtures::{load_fixture_value, portal_payload};

fn normalizer() -> Normalizer {
    Normalizer::default()
}

// ── DORIS ─────────────────────────────────────────────────────────────────

#[test]
fn doris_fixture_maps_every_field() {
    let record = normalizer()
        .normalize(SourceId::Doris, &portal_payload(SourceId::Doris))
        .expect("doris fixture should normalize");

    assert_eq!(record.property_id, "DL-SD-2022-004417");
    assert_eq!(record.owner_name, "Rajesh Kumar");
    assert_eq!(record.registration_number.as_deref(), Some("REG-DEL-2022-881"));
    assert_eq!(record.property_type, PropertyType::Urban);
    assert_eq!(record.property_location, "B-42, Saket, South Delhi, Delhi - 110017");
    assert_eq!(record.registration_date.as_deref(), Some("2022-03-15"));
    assert_eq!(record.last_updated.as_deref(), Some("2022-03-15"));
    assert_eq!(record.market_value.as_deref(), Some("\u{20b9}82,45,000"));
    assert_eq!(record.property_area.as_deref(), Some("1250 sq.ft"));
    assert_eq!(record.legal_status.as_deref(), Some("Clear"));
    assert_eq!(
        record.coordinates,
        Some(Coordinates { latitude: 28.5245, longitude: 77.2066 })
    );
    assert_eq!(record.source_portal, SourceId::Doris);
    assert_eq!(record.trustworthiness_score.value(), 85);
    assert_eq!(record.source_documents, vec!["registration_deed", "property_card"]);

    assert_eq!(record.encumbrances.len(), 1);
    assert_eq!(record.encumbrances[0].kind, "Mortgage");
    assert_eq!(record.encumbrances[0].holder, "HDFC Bank");
}

#[test]
fn doris_api_vocabulary_is_accepted() {
    let raw = RawPayload::new(load_fixture_value("portals/doris_api.json"));
    let record = normalizer().normalize(SourceId::Doris, &raw).unwrap();

    assert_eq!(record.property_id, "DL381127");
    assert_eq!(record.owner_name, "Priya Sharma");
    assert_eq!(record.property_location, "12 Lodhi Road, Central Delhi, Delhi - 110003");
    assert_eq!(record.registration_date.as_deref(), Some("2024-02-11"));
    assert!(record.encumbrances.is_empty(), "\"No Legal Charges\" is not a charge");
}

#[test]
fn doris_without_encumbrance_field_reports_unknown_mortgage() {
    let raw = RawPayload::new(json!({"Property ID": "P1", "Owner Name": "A"}));
    let record = normalizer().normalize(SourceId::Doris, &raw).unwrap();
    assert_eq!(record.encumbrances.len(), 1);
    assert_eq!(record.encumbrances[0].holder, "Not Available");
    assert_eq!(record.encumbrances[0].status, EncumbranceStatus::Active);
    assert_eq!(record.last_updated, None);
}

// ── DLR ───────────────────────────────────────────────────────────────────

#[test]
fn dlr_fixture_builds_location_and_arrears() {
    let record = normalizer()
        .normalize(SourceId::Dlr, &portal_payload(SourceId::Dlr))
        .unwrap();

    assert_eq!(record.property_id, "KH-47/12");
    assert_eq!(record.registration_number.as_deref(), Some("KHATA/5521"));
    assert_eq!(record.property_type, PropertyType::Rural);
    assert_eq!(record.property_location, "Chhawla, South West Delhi, Delhi");
    assert_eq!(record.last_updated.as_deref(), Some("2023-11-08"));
    assert_eq!(record.trustworthiness_score.value(), 80);

    let kinds: Vec<&str> = record.encumbrances.iter().map(|e| e.kind.as_str()).collect();
    assert_eq!(kinds, vec!["Land Use Restriction", "Land Revenue Arrears"]);
    assert_eq!(record.encumbrances[1].status, EncumbranceStatus::Pending);
}

#[test]
fn dlr_paid_tax_has_only_land_use_restriction() {
    let raw = RawPayload::new(json!({
        "surveyNumber": "KH-1/1",
        "ownerName": "B",
        "landType": "Urban Development Authority",
        "taxStatus": "Paid"
    }));
    let record = normalizer().normalize(SourceId::Dlr, &raw).unwrap();
    assert_eq!(record.property_type, PropertyType::Urban);
    assert_eq!(record.encumbrances.len(), 1);
}

// ── CERSAI ────────────────────────────────────────────────────────────────

#[test]
fn cersai_fixture_maps_security_interest() {
    let record = normalizer()
        .normalize(SourceId::Cersai, &portal_payload(SourceId::Cersai))
        .unwrap();

    assert_eq!(record.property_id, "CERSAI-4471902");
    assert_eq!(record.owner_name, "Rajesh Kumar");
    assert_eq!(record.property_location, "B-42, Saket, South Delhi, Delhi");
    assert_eq!(record.registration_date.as_deref(), Some("2022-04-02"));
    assert_eq!(record.trustworthiness_score.value(), 90);

    let charge = &record.encumbrances[0];
    assert_eq!(charge.kind, "Security Interest");
    assert_eq!(charge.holder, "HDFC Bank");
    assert_eq!(charge.value.as_deref(), Some("\u{20b9}56,00,000"));
    assert_eq!(charge.status, EncumbranceStatus::Active);
}

#[test]
fn cersai_satisfied_charge_is_discharged() {
    let raw = RawPayload::new(json!({
        "Asset ID": "A1",
        "Borrower Name": "B",
        "Status": "Satisfied",
        "District": "Pune",
        "State": "Maharashtra"
    }));
    let record = normalizer().normalize(SourceId::Cersai, &raw).unwrap();
    assert_eq!(record.encumbrances[0].status, EncumbranceStatus::Discharged);
    assert_eq!(record.encumbrances[0].holder, "Unknown Bank");
    assert_eq!(record.property_location, "Pune, Maharashtra");
}

// ── MCA21 ─────────────────────────────────────────────────────────────────

#[test]
fn mca21_fixture_maps_company() {
    let record = normalizer()
        .normalize(SourceId::Mca21, &portal_payload(SourceId::Mca21))
        .unwrap();

    assert_eq!(record.property_id, "U45200DL2011PTC219934");
    assert_eq!(record.registration_number.as_deref(), Some("U45200DL2011PTC219934"));
    assert_eq!(record.property_type, PropertyType::Urban);
    assert_eq!(record.registration_date.as_deref(), Some("2011-03-07"));
    assert_eq!(
        record.market_value.as_deref(),
        Some("Authorized Capital: \u{20b9}2,50,00,000")
    );
    assert_eq!(record.encumbrances[0].value.as_deref(), Some("\u{20b9}45,00,000"));
    // payload confidence overrides the source default
    assert_eq!(record.trustworthiness_score.value(), 70);
}

#[test]
fn mca21_without_capital_reports_unknown() {
    let raw = RawPayload::new(json!({"cin": "U1", "companyName": "C Ltd"}));
    let record = normalizer().normalize(SourceId::Mca21, &raw).unwrap();
    assert_eq!(record.market_value.as_deref(), Some("Authorized Capital: Unknown"));
}

// ── Failures ──────────────────────────────────────────────────────────────

#[test]
fn missing_mandatory_field_is_reported() {
    let raw = RawPayload::new(json!({"Owner Name": "A"}));
    let err = normalizer().try_normalize(SourceId::Doris, &raw).unwrap_err();
    assert_eq!(
        err,
        NormalizationError::MissingField {
            source_id: "doris".to_string(),
            field: "Property ID",
        }
    );
    assert!(normalizer().normalize(SourceId::Doris, &raw).is_none());
}

#[test]
fn blank_mandatory_field_counts_as_missing() {
    let raw = RawPayload::new(json!({"CIN": "  ", "Company Name": "C"}));
    assert!(normalizer().normalize(SourceId::Mca21, &raw).is_none());
}

#[test]
fn non_object_payload_is_rejected() {
    let raw = RawPayload::new(json!("found"));
    assert!(matches!(
        normalizer().try_normalize(SourceId::Cersai, &raw),
        Err(NormalizationError::MalformedPayload { .. })
    ));
}

#[test]
fn unknown_source_name_yields_none() {
    let raw = portal_payload(SourceId::Doris);
    assert!(normalizer().normalize_named("igrs", &raw).is_none());
    assert!(normalizer().normalize_named("DORIS", &raw).is_some());
}

// ── Configuration ─────────────────────────────────────────────────────────

#[test]
fn trust_table_is_configurable() {
    let mut trust = TrustConfig::default();
    trust.scores.insert(SourceId::Cersai, 60);
    let record = Normalizer::new(trust)
        .normalize(SourceId::Cersai, &portal_payload(SourceId::Cersai))
        .unwrap();
    assert_eq!(record.trustworthiness_score.value(), 60);
}

#[test]
fn jitter_from_config_moves_coordinates_deterministically() {
    let config = ParcelConfig::from_toml(
        "[normalization]\ncoordinate_jitter = true\njitter_degrees = 0.01",
    )
    .unwrap();
    let normalizer = Normalizer::from_config(&config);
    let raw = portal_payload(SourceId::Doris);

    let a = normalizer.normalize(SourceId::Doris, &raw).unwrap();
    let b = normalizer.normalize(SourceId::Doris, &raw).unwrap();
    assert_eq!(a, b);

    let c = a.coordinates.unwrap();
    assert!((c.latitude - 28.5245).abs() <= 0.0100001);
    assert!((c.longitude - 77.2066).abs() <= 0.0100001);
}

#[test]
fn injected_adjuster_is_used() {
    let normalizer = Normalizer::default().with_adjuster(Arc::new(HashJitter::new(0.0)));
    let record = normalizer
        .normalize(SourceId::Doris, &portal_payload(SourceId::Doris))
        .unwrap();
    assert_eq!(
        record.coordinates,
        Some(Coordinates { latitude: 28.5245, longitude: 77.2066 })
    );
}

#[test]
fn payload_documents_override_defaults() {
    let raw = RawPayload::new(json!({
        "Survey Number": "S1",
        "Owner": "O",
        "sourceDocuments": ["mutation_register"]
    }));
    let record = normalizer().normalize(SourceId::Dlr, &raw).unwrap();
    assert_eq!(record.source_documents, vec!["mutation_register"]);
}
