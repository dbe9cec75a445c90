//! CERSAI: Central Registry of Securitisation Asset Reconstruction and
//! Security Interest.

use parcel_core::errors::NormalizationError;
use parcel_core::models::{Encumbrance, EncumbranceStatus, SourceId};
use serde::Deserialize;

use super::{join_present, lenient_string, required, CommonFields, MappedFields};
use crate::classify::classify_property_type;
use crate::dates::normalize_date;
use crate::money::normalize_money;

const DOCUMENTS: &[&str] = &["security_agreement", "charge_document"];

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CersaiPayload {
    #[serde(default, rename = "Asset ID", alias = "assetId", deserialize_with = "lenient_string")]
    pub asset_id: Option<String>,
    #[serde(default, rename = "Borrower Name", alias = "borrowerName", deserialize_with = "lenient_string")]
    pub borrower_name: Option<String>,
    #[serde(default, rename = "Registration Number", alias = "registrationNumber", deserialize_with = "lenient_string")]
    pub registration_number: Option<String>,
    #[serde(default, rename = "Security Type", alias = "securityType", deserialize_with = "lenient_string")]
    pub security_type: Option<String>,
    #[serde(default, rename = "Address", alias = "address", deserialize_with = "lenient_string")]
    pub address: Option<String>,
    #[serde(
        default,
        rename = "Property Description",
        alias = "propertyDescription",
        deserialize_with = "lenient_string"
    )]
    pub property_description: Option<String>,
    #[serde(default, rename = "District", alias = "district", deserialize_with = "lenient_string")]
    pub district: Option<String>,
    #[serde(default, rename = "State", alias = "state", deserialize_with = "lenient_string")]
    pub state: Option<String>,
    #[serde(default, rename = "Creation Date", alias = "creationDate", deserialize_with = "lenient_string")]
    pub creation_date: Option<String>,
    #[serde(default, rename = "Secured Creditor", alias = "securedCreditor", deserialize_with = "lenient_string")]
    pub secured_creditor: Option<String>,
    #[serde(default, rename = "Charge Amount", alias = "chargeAmount", deserialize_with = "lenient_string")]
    pub charge_amount: Option<String>,
    #[serde(default, rename = "Status", alias = "status", deserialize_with = "lenient_string")]
    pub status: Option<String>,
    #[serde(flatten)]
    pub common: CommonFields,
}

pub(crate) fn map(p: &CersaiPayload) -> Result<MappedFields, NormalizationError> {
    let location = p
        .address
        .clone()
        .or_else(|| p.property_description.clone())
        .unwrap_or_else(|| join_present(&[&p.district, &p.state]));

    let creation_date = p.creation_date.as_deref().map(normalize_date);

    let status = if p
        .status
        .as_deref()
        .is_some_and(|s| s.eq_ignore_ascii_case("active"))
    {
        EncumbranceStatus::Active
    } else {
        EncumbranceStatus::Discharged
    };
    let charge = Encumbrance::new(
        "Security Interest",
        p.secured_creditor.as_deref().unwrap_or("Unknown Bank"),
        status,
    )
    .with_value(p.charge_amount.as_deref().map(normalize_money))
    .with_date(creation_date.clone());

    Ok(MappedFields {
        property_id: required(SourceId::Cersai, "Asset ID", &p.asset_id)?,
        owner_name: required(SourceId::Cersai, "Borrower Name", &p.borrower_name)?,
        registration_number: p.registration_number.clone(),
        property_type: classify_property_type(p.security_type.as_deref()),
        property_location: location,
        registration_date: creation_date.clone(),
        market_value: None,
        property_area: None,
        encumbrances: vec![charge],
        last_updated: creation_date,
        default_documents: DOCUMENTS,
    })
}
