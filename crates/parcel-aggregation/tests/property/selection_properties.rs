use parcel_aggregation::select_sources;
use parcel_core::config::RoutingConfig;
use parcel_core::models::{PropertyType, SearchQuery, SourceId};
use proptest::prelude::*;
use proptest::sample::subsequence;

// ── Auto selection reorders, it never drops or duplicates ─────────────────

proptest! {
    #[test]
    fn auto_selection_is_a_permutation_of_registered(
        registered in subsequence(SourceId::ALL.to_vec(), 0..=4),
        rural in any::<bool>(),
        state in prop_oneof![Just("Delhi"), Just("Karnataka"), Just("")],
    ) {
        let property_type = if rural { PropertyType::Rural } else { PropertyType::Urban };
        let query = SearchQuery::new("A", "110017")
            .with_property_id("P1")
            .with_address("1 Main Rd", "Central", state)
            .with_property_type(property_type);

        let mut selected = select_sources(&query, &RoutingConfig::default(), &registered).unwrap();
        if rural && registered.contains(&SourceId::Dlr) {
            prop_assert_eq!(selected[0], SourceId::Dlr);
        }
        selected.sort();
        let mut expected = registered.clone();
        expected.sort();
        prop_assert_eq!(selected, expected);
    }
}
