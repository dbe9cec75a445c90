//! DORIS: Delhi Online Registration Information System.

use parcel_core::errors::NormalizationError;
use parcel_core::models::{Encumbrance, EncumbranceStatus, SourceId};
use serde::Deserialize;

use super::{lenient_string, required, CommonFields, MappedFields};
use crate::classify::classify_property_type;
use crate::dates::normalize_date;
use crate::money::normalize_money;

const DOCUMENTS: &[&str] = &["registration_deed", "property_card"];
const UNKNOWN_HOLDER: &str = "Not Available";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DorisPayload {
    #[serde(default, rename = "Property ID", alias = "propertyId", deserialize_with = "lenient_string")]
    pub property_id: Option<String>,
    #[serde(default, rename = "Owner Name", alias = "ownerName", deserialize_with = "lenient_string")]
    pub owner_name: Option<String>,
    #[serde(
        default,
        rename = "Registration Number",
        alias = "Registration ID",
        alias = "registrationNumber",
        deserialize_with = "lenient_string"
    )]
    pub registration_number: Option<String>,
    #[serde(default, rename = "Property Type", alias = "propertyType", deserialize_with = "lenient_string")]
    pub property_type: Option<String>,
    #[serde(default, rename = "Address", alias = "propertyLocation", deserialize_with = "lenient_string")]
    pub address: Option<String>,
    #[serde(default, rename = "Registration Date", alias = "registrationDate", deserialize_with = "lenient_string")]
    pub registration_date: Option<String>,
    #[serde(default, rename = "Last Updated", alias = "lastUpdated", deserialize_with = "lenient_string")]
    pub last_updated: Option<String>,
    #[serde(default, rename = "Market Value", alias = "marketValue", deserialize_with = "lenient_string")]
    pub market_value: Option<String>,
    #[serde(
        default,
        rename = "Property Area",
        alias = "area",
        alias = "Area",
        deserialize_with = "lenient_string"
    )]
    pub area: Option<String>,
    #[serde(default, rename = "Encumbrance", alias = "encumbrance", deserialize_with = "lenient_string")]
    pub encumbrance: Option<String>,
    #[serde(flatten)]
    pub common: CommonFields,
}

pub(crate) fn map(p: &DorisPayload) -> Result<MappedFields, NormalizationError> {
    let registration_date = p.registration_date.as_deref().map(normalize_date);
    let last_updated = p
        .last_updated
        .as_deref()
        .map(normalize_date)
        .or_else(|| registration_date.clone());

    Ok(MappedFields {
        property_id: required(SourceId::Doris, "Property ID", &p.property_id)?,
        owner_name: required(SourceId::Doris, "Owner Name", &p.owner_name)?,
        registration_number: p.registration_number.clone(),
        property_type: classify_property_type(p.property_type.as_deref()),
        property_location: p.address.clone().unwrap_or_default(),
        registration_date,
        market_value: p.market_value.as_deref().map(normalize_money),
        property_area: p.area.clone(),
        encumbrances: parse_encumbrance(p.encumbrance.as_deref()).into_iter().collect(),
        last_updated,
        default_documents: DOCUMENTS,
    })
}

/// DORIS reports charges as free text: "Mortgage with XYZ Bank" or
/// "No Legal Charges". A missing field is reported as an unknown mortgage.
pub fn parse_encumbrance(text: Option<&str>) -> Option<Encumbrance> {
    let Some(text) = text.map(str::trim).filter(|t| !t.is_empty()) else {
        return Some(Encumbrance::new("Mortgage", UNKNOWN_HOLDER, EncumbranceStatus::Active));
    };

    // ASCII folding keeps byte offsets aligned with `text`.
    let lower = text.to_ascii_lowercase();
    if lower == "no" || lower == "none" || lower == "nil" || lower.starts_with("no ") {
        return None;
    }

    let (kind, holder) = match lower.find(" with ") {
        Some(idx) => (text[..idx].trim(), text[idx + " with ".len()..].trim()),
        None => (text, UNKNOWN_HOLDER),
    };
    let holder = if holder.is_empty() { UNKNOWN_HOLDER } else { holder };
    Some(Encumbrance::new(kind, holder, EncumbranceStatus::Active))
}
