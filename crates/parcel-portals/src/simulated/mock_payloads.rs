//! Demo payloads in each portal's API vocabulary.

use chrono::{Duration as ChronoDuration, NaiveDate};
use parcel_core::models::{PropertyType, SearchQuery, SourceId};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde_json::{json, Value};

const BANKS: &[&str] = &["HDFC Bank", "SBI", "ICICI Bank", "Axis Bank"];

/// Anchor for generated dates, so a variant always yields the same payload.
fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or_default()
}

/// Generate a found payload for `source` answering `query`. The same
/// `variant` always produces the same payload.
pub fn mock_payload(source: SourceId, query: &SearchQuery, variant: u64) -> Value {
    let mut rng = StdRng::seed_from_u64(variant);
    match source {
        SourceId::Doris => doris(query, &mut rng),
        SourceId::Dlr => dlr(query, &mut rng),
        SourceId::Cersai => cersai(query, &mut rng),
        SourceId::Mca21 => mca21(query, &mut rng),
    }
}

fn days_ago(rng: &mut StdRng, max_days: i64) -> String {
    let date = reference_date() - ChronoDuration::days(rng.gen_range(0..max_days));
    date.format("%d/%m/%Y").to_string()
}

fn rupees(rng: &mut StdRng, min: u64, span: u64) -> String {
    format!("\u{20b9} {}", min + rng.gen_range(0..span))
}

fn pick_bank(rng: &mut StdRng) -> &'static str {
    BANKS.choose(rng).copied().unwrap_or("SBI")
}

fn given(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn doris(query: &SearchQuery, rng: &mut StdRng) -> Value {
    let urban = query.property_type == PropertyType::Urban;
    let location = if query.address.is_identifying() {
        query.address.to_display_line()
    } else {
        "Location details not provided".to_string()
    };
    json!({
        "ownerName": query.owner_name,
        "propertyId": given(&query.property_id)
            .map(str::to_string)
            .unwrap_or_else(|| format!("DL{}", rng.gen_range(0..1_000_000))),
        "registrationNumber": given(&query.registration_number)
            .map(str::to_string)
            .unwrap_or_else(|| format!("REG-DEL-2024-{}", rng.gen_range(0..1000))),
        "ownership": if rng.gen_bool(0.5) { "Freehold" } else { "Leasehold" },
        "encumbrance": if rng.gen_bool(0.3) { "Mortgage with XYZ Bank" } else { "No Legal Charges" },
        "area": format!("{} sq.ft", 800 + rng.gen_range(0..700)),
        "propertyLocation": location,
        "registrationDate": days_ago(rng, 365),
        "marketValue": rupees(rng, 2_000_000, 9_000_000),
        "propertyType": if urban { "Urban Residential" } else { "Rural Land" },
    })
}

fn dlr(query: &SearchQuery, rng: &mut StdRng) -> Value {
    let urban = query.property_type == PropertyType::Urban;
    let address = &query.address;
    let or = |v: &str, fallback: &str| {
        if v.trim().is_empty() {
            fallback.to_string()
        } else {
            v.trim().to_string()
        }
    };
    let area = if urban {
        format!("{} sq.ft", 800 + rng.gen_range(0..700))
    } else {
        format!("{:.2} hectares", rng.gen::<f64>())
    };
    json!({
        "ownerName": query.owner_name,
        "surveyNumber": given(&query.property_id)
            .map(str::to_string)
            .unwrap_or_else(|| format!("KH-{}/{}", rng.gen_range(0..100), rng.gen_range(0..100))),
        "khataNumber": format!("KHATA/{}", rng.gen_range(0..10_000)),
        "landType": if urban { "Urban Development Authority" } else { "Agricultural" },
        "area": area,
        "village": or(&address.district, "Sample Village"),
        "district": or(&address.district, "Sample District"),
        "state": or(&address.state, "Sample State"),
        "lastUpdated": days_ago(rng, 365),
        "landUse": if urban { "Residential" } else { "Farming" },
        "mutationHistory": [{
            "date": days_ago(rng, 730),
            "previousOwner": "Previous Owner Name",
            "newOwner": query.owner_name,
            "transactionType": "Sale Deed",
        }],
        "taxStatus": if rng.gen_bool(0.2) { "Pending" } else { "Paid" },
    })
}

fn cersai(query: &SearchQuery, rng: &mut StdRng) -> Value {
    let description = if query.address.is_identifying() {
        [&query.address.line, &query.address.district, &query.address.state]
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    } else {
        "Property description not provided".to_string()
    };
    let creditor = pick_bank(rng);
    json!({
        "assetId": format!("CERSAI-{}", rng.gen_range(0..10_000_000)),
        "borrowerName": query.owner_name,
        "securityType": "Immovable Property",
        "creationDate": days_ago(rng, 365),
        "securedCreditor": creditor,
        "propertyDescription": description,
        "chargeAmount": rupees(rng, 1_000_000, 7_000_000),
        "status": if rng.gen_bool(0.8) { "Active" } else { "Satisfied" },
        "registrationNumber": given(&query.registration_number)
            .map(str::to_string)
            .unwrap_or_else(|| format!("CERSAI/2024/{}", rng.gen_range(0..10_000))),
        "chargeHolders": [{
            "name": pick_bank(rng),
            "priority": "1st Charge",
        }],
    })
}

fn mca21(query: &SearchQuery, rng: &mut StdRng) -> Value {
    let urban = query.property_type == PropertyType::Urban;
    let address = if query.address.is_identifying() {
        query.address.to_display_line()
    } else {
        "Corporate Address".to_string()
    };
    json!({
        "companyName": format!("{} Enterprises Ltd.", query.owner_name),
        "cin": format!(
            "U{}DL2024PTC{}",
            rng.gen_range(0..10_000_000),
            rng.gen_range(0..100_000)
        ),
        "companyStatus": if rng.gen_bool(0.9) { "Active" } else { "Struck Off" },
        "address": address,
        "dateOfIncorporation": days_ago(rng, 3650),
        "authorizedCapital": rupees(rng, 10_000_000, 90_000_000),
        "paidUpCapital": rupees(rng, 1_000_000, 9_000_000),
        "companyCategory": if rng.gen_bool(0.5) { "Private" } else { "Public" },
        "properties": [{
            "propertyId": given(&query.property_id)
                .map(str::to_string)
                .unwrap_or_else(|| format!("PROP{}", rng.gen_range(0..1_000_000))),
            "propertyType": if urban { "Corporate Office" } else { "Industrial Land" },
            "area": format!("{} sq.ft", 800 + rng.gen_range(0..7000)),
            "ownershipType": "Owned",
        }],
        "directors": [{
            "name": query.owner_name,
            "din": format!("DIN{}", rng.gen_range(0..10_000_000)),
            "designation": "Director",
        }],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query() -> SearchQuery {
        SearchQuery::new("Meera Iyer", "560001")
            .with_property_id("KA-BLR-77")
            .with_address("14 MG Road", "Bengaluru Urban", "Karnataka")
    }

    #[test]
    fn variant_determines_payload() {
        for source in SourceId::ALL {
            assert_eq!(mock_payload(source, &query(), 42), mock_payload(source, &query(), 42));
        }
    }

    #[test]
    fn payload_echoes_query() {
        let doris = mock_payload(SourceId::Doris, &query(), 1);
        assert_eq!(doris["ownerName"], "Meera Iyer");
        assert_eq!(doris["propertyId"], "KA-BLR-77");
        assert_eq!(
            doris["propertyLocation"],
            "14 MG Road, Bengaluru Urban, Karnataka - 560001"
        );

        let mca = mock_payload(SourceId::Mca21, &query(), 1);
        assert_eq!(mca["companyName"], "Meera Iyer Enterprises Ltd.");
    }

    #[test]
    fn dates_are_day_first() {
        let dlr = mock_payload(SourceId::Dlr, &query(), 9);
        let date = dlr["lastUpdated"].as_str().unwrap();
        assert_eq!(date.split('/').next().unwrap().len(), 2);
    }
}
