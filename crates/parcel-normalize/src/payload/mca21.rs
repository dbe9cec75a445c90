//! MCA21: Ministry of Corporate Affairs company registry.

use parcel_core::errors::NormalizationError;
use parcel_core::models::{Encumbrance, EncumbranceStatus, PropertyType, SourceId};
use serde::Deserialize;

use super::{join_present, lenient_string, required, CommonFields, MappedFields};
use crate::dates::normalize_date;
use crate::money::normalize_money;

const DOCUMENTS: &[&str] = &["incorporation_certificate", "annual_return"];

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Mca21Payload {
    #[serde(default, rename = "CIN", alias = "cin", deserialize_with = "lenient_string")]
    pub cin: Option<String>,
    #[serde(default, rename = "Company Name", alias = "companyName", deserialize_with = "lenient_string")]
    pub company_name: Option<String>,
    #[serde(default, rename = "Address", alias = "address", deserialize_with = "lenient_string")]
    pub address: Option<String>,
    #[serde(default, rename = "District", alias = "district", deserialize_with = "lenient_string")]
    pub district: Option<String>,
    #[serde(default, rename = "State", alias = "state", deserialize_with = "lenient_string")]
    pub state: Option<String>,
    #[serde(
        default,
        rename = "Date of Incorporation",
        alias = "dateOfIncorporation",
        deserialize_with = "lenient_string"
    )]
    pub date_of_incorporation: Option<String>,
    #[serde(default, rename = "Authorized Capital", alias = "authorizedCapital", deserialize_with = "lenient_string")]
    pub authorized_capital: Option<String>,
    #[serde(default, rename = "Paid Up Capital", alias = "paidUpCapital", deserialize_with = "lenient_string")]
    pub paid_up_capital: Option<String>,
    #[serde(flatten)]
    pub common: CommonFields,
}

pub(crate) fn map(p: &Mca21Payload) -> Result<MappedFields, NormalizationError> {
    let cin = required(SourceId::Mca21, "CIN", &p.cin)?;
    let incorporated = p.date_of_incorporation.as_deref().map(normalize_date);
    let authorized = p
        .authorized_capital
        .as_deref()
        .map(normalize_money)
        .unwrap_or_else(|| "Unknown".to_string());

    let charge = Encumbrance::new(
        "Corporate Charge",
        "Ministry of Corporate Affairs",
        EncumbranceStatus::Active,
    )
    .with_value(p.paid_up_capital.as_deref().map(normalize_money));

    Ok(MappedFields {
        property_id: cin.clone(),
        owner_name: required(SourceId::Mca21, "Company Name", &p.company_name)?,
        registration_number: Some(cin),
        property_type: PropertyType::Urban,
        property_location: p
            .address
            .clone()
            .unwrap_or_else(|| join_present(&[&p.district, &p.state])),
        registration_date: incorporated.clone(),
        market_value: Some(format!("Authorized Capital: {authorized}")),
        property_area: None,
        encumbrances: vec![charge],
        last_updated: incorporated,
        default_documents: DOCUMENTS,
    })
}
