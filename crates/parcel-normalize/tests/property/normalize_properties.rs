use parcel_core::models::{RawPayload, SourceId};
use parcel_normalize::classify::classify_property_type;
use parcel_normalize::dates::normalize_date;
use parcel_normalize::money::{group_indian, normalize_money};
use parcel_normalize::payload::doris::parse_encumbrance;
use parcel_normalize::Normalizer;
use proptest::prelude::*;
use serde_json::json;

fn any_source() -> impl Strategy<Value = SourceId> {
    prop_oneof![
        Just(SourceId::Doris),
        Just(SourceId::Dlr),
        Just(SourceId::Cersai),
        Just(SourceId::Mca21),
    ]
}

// ── Normalization is pure ─────────────────────────────────────────────────

proptest! {
    #[test]
    fn normalize_is_deterministic(
        source in any_source(),
        id in "[A-Z0-9-]{1,16}",
        owner in "[A-Za-z ]{1,24}",
        date in "[0-9]{1,2}/[0-9]{1,2}/[0-9]{4}",
        amount in 0u64..1_000_000_000,
    ) {
        let raw = RawPayload::new(json!({
            "Property ID": id, "Survey Number": id, "Asset ID": id, "CIN": id,
            "Owner Name": owner, "Owner": owner, "Borrower Name": owner, "Company Name": owner,
            "Registration Date": date, "Creation Date": date, "Date of Incorporation": date,
            "Market Value": format!("Rs {amount}"),
            "Location": {"latitude": 12.9, "longitude": 77.5}
        }));
        let normalizer = Normalizer::default();
        let first = normalizer.normalize(source, &raw);
        let second = normalizer.normalize(source, &raw);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn free_text_encumbrance_never_panics(
        kind in "\\PC{0,12}",
        holder in "\\PC{0,12}",
        separator in prop_oneof![Just(" with "), Just(" WITH "), Just(" "), Just("")],
    ) {
        let text = format!("{kind}{separator}{holder}");
        let parsed = parse_encumbrance(Some(&text)).filter(|_| !text.trim().is_empty());
        if let Some(e) = parsed {
            prop_assert!(text.contains(e.kind.as_str()));
            prop_assert!(e.holder == "Not Available" || text.contains(e.holder.as_str()));
        }

        let raw = RawPayload::new(json!({
            "Property ID": "DL-1", "Owner Name": "O", "Encumbrance": text
        }));
        prop_assert!(Normalizer::default().normalize(SourceId::Doris, &raw).is_some());
    }

    #[test]
    fn trust_score_never_exceeds_100(source in any_source(), confidence in -10.0f64..1000.0) {
        let raw = RawPayload::new(json!({
            "Property ID": "X", "Survey Number": "X", "Asset ID": "X", "CIN": "X",
            "Owner Name": "O", "Owner": "O", "Borrower Name": "O", "Company Name": "O",
            "Confidence": confidence
        }));
        let record = Normalizer::default().normalize(source, &raw).unwrap();
        prop_assert!(record.trustworthiness_score.value() <= 100);
        prop_assert_eq!(record.source_portal, source);
    }
}

// ── Field helpers ─────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn normalized_dates_are_stable(text in "\\PC{0,20}") {
        let once = normalize_date(&text);
        prop_assert_eq!(normalize_date(&once), once.clone());
    }

    #[test]
    fn normalized_money_is_stable(amount in 0u64..10_000_000_000) {
        let once = normalize_money(&amount.to_string());
        prop_assert_eq!(normalize_money(&once), once.clone());
        prop_assert_eq!(once.replace(['\u{20b9}', ','], ""), amount.to_string());
    }

    #[test]
    fn indian_grouping_keeps_last_three_digits(amount in 1_000u64..u64::MAX / 10) {
        let grouped = group_indian(amount);
        let tail = grouped.rsplit(',').next().unwrap_or_default();
        prop_assert_eq!(tail.len(), 3);
    }

    #[test]
    fn classification_is_total(text in proptest::option::of("\\PC{0,30}")) {
        let _ = classify_property_type(text.as_deref());
    }
}
