use parcel_core::config::*;
use parcel_core::models::SourceId;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = ParcelConfig::from_toml("").unwrap();

    // Portal defaults
    let doris = config.portals.endpoint(SourceId::Doris);
    assert!(doris.enabled);
    assert!(doris.base_url.is_none());
    assert_eq!(doris.timeout_ms, 15_000);
    assert_eq!(config.portals.enabled_sources(), SourceId::ALL.to_vec());

    // Routing defaults
    assert_eq!(config.routing.default_order, SourceId::ALL.to_vec());
    assert_eq!(config.routing.rural_preferred, Some(SourceId::Dlr));
    assert_eq!(
        config.routing.state_affinity.get("delhi"),
        Some(&SourceId::Doris)
    );

    // Merge defaults
    assert_eq!(
        config.merge.priority,
        vec![
            SourceId::Cersai,
            SourceId::Doris,
            SourceId::Dlr,
            SourceId::Mca21
        ]
    );

    // Trust defaults
    assert_eq!(config.trust.score_for(SourceId::Doris).value(), 85);
    assert_eq!(config.trust.score_for(SourceId::Dlr).value(), 80);
    assert_eq!(config.trust.score_for(SourceId::Cersai).value(), 90);
    assert_eq!(config.trust.score_for(SourceId::Mca21).value(), 75);

    // Aggregation / simulation / observability defaults
    assert_eq!(config.aggregation.per_call_timeout_ms, 5_000);
    assert!(config.simulation.seed.is_none());
    assert_eq!(config.simulation.unavailable_rate, 0.1);
    assert_eq!(config.simulation.not_found_rate, 0.2);
    assert!(!config.normalization.coordinate_jitter);
    assert_eq!(config.observability.log_level, "info");
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[portals.cersai]
base_url = "http://localhost:5000/api/search/cersai"
timeout_ms = 2000

[portals.mca21]
enabled = false

[trust]
dlr = 70

[merge]
priority = ["doris", "cersai"]
"#;
    let config = ParcelConfig::from_toml(toml).unwrap();
    let cersai = config.portals.endpoint(SourceId::Cersai);
    assert_eq!(
        cersai.base_url.as_deref(),
        Some("http://localhost:5000/api/search/cersai")
    );
    assert_eq!(cersai.timeout_ms, 2000);
    assert!(cersai.enabled);
    assert!(!config.portals.endpoint(SourceId::Mca21).enabled);
    assert_eq!(
        config.portals.enabled_sources(),
        vec![SourceId::Doris, SourceId::Dlr, SourceId::Cersai]
    );

    // Overridden trust entry, others fall back to the built-in table.
    assert_eq!(config.trust.score_for(SourceId::Dlr).value(), 70);
    assert_eq!(config.trust.score_for(SourceId::Cersai).value(), 90);

    assert_eq!(config.merge.priority, vec![SourceId::Doris, SourceId::Cersai]);
    // Non-overridden sections keep defaults
    assert_eq!(config.aggregation.per_call_timeout_ms, 5_000);
}

#[test]
fn config_rejects_duplicate_priority_entries() {
    let err = ParcelConfig::from_toml("[merge]\npriority = [\"dlr\", \"dlr\"]").unwrap_err();
    assert!(err.to_string().contains("merge.priority"));
}

#[test]
fn config_rejects_out_of_range_rates() {
    let err = ParcelConfig::from_toml("[simulation]\nunavailable_rate = 1.5").unwrap_err();
    assert!(err.to_string().contains("simulation.unavailable_rate"));
}

#[test]
fn config_rejects_zero_timeout() {
    let err = ParcelConfig::from_toml("[aggregation]\nper_call_timeout_ms = 0").unwrap_err();
    assert!(matches!(err, parcel_core::errors::ConfigError::Invalid { .. }));
}

#[test]
fn config_rejects_unknown_source_keys() {
    let err = ParcelConfig::from_toml("[trust]\nigrs = 60").unwrap_err();
    assert!(matches!(err, parcel_core::errors::ConfigError::Parse { .. }));
}

#[test]
fn config_load_reports_missing_file() {
    let err = ParcelConfig::load("/definitely/not/here/parcel.toml").unwrap_err();
    assert!(matches!(err, parcel_core::errors::ConfigError::Io { .. }));
}

#[test]
fn config_serde_roundtrip() {
    let config = ParcelConfig::default();
    let toml_str = toml::to_string(&config).unwrap();
    let roundtripped = ParcelConfig::from_toml(&toml_str).unwrap();
    assert_eq!(roundtripped.merge.priority, config.merge.priority);
    assert_eq!(roundtripped.routing, config.routing);
}
