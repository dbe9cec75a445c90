//! DLR: Department of Land Records.

use parcel_core::errors::NormalizationError;
use parcel_core::models::{Encumbrance, EncumbranceStatus, SourceId};
use serde::Deserialize;

use super::{join_present, lenient_string, required, CommonFields, MappedFields};
use crate::classify::classify_property_type;
use crate::dates::normalize_date;

const DOCUMENTS: &[&str] = &["land_record", "revenue_receipt"];
const LAND_REVENUE_DEPARTMENT: &str = "Land Revenue Department";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DlrPayload {
    #[serde(default, rename = "Survey Number", alias = "surveyNumber", deserialize_with = "lenient_string")]
    pub survey_number: Option<String>,
    #[serde(default, rename = "Owner", alias = "ownerName", alias = "Owner Name", deserialize_with = "lenient_string")]
    pub owner: Option<String>,
    #[serde(default, rename = "Khata Number", alias = "khataNumber", deserialize_with = "lenient_string")]
    pub khata_number: Option<String>,
    #[serde(default, rename = "Land Type", alias = "landType", deserialize_with = "lenient_string")]
    pub land_type: Option<String>,
    #[serde(default, rename = "Address", alias = "address", deserialize_with = "lenient_string")]
    pub address: Option<String>,
    #[serde(
        default,
        rename = "Village/Ward",
        alias = "village",
        alias = "Village",
        deserialize_with = "lenient_string"
    )]
    pub village: Option<String>,
    #[serde(default, rename = "District", alias = "district", deserialize_with = "lenient_string")]
    pub district: Option<String>,
    #[serde(default, rename = "State", alias = "state", deserialize_with = "lenient_string")]
    pub state: Option<String>,
    #[serde(default, rename = "Area", alias = "area", deserialize_with = "lenient_string")]
    pub area: Option<String>,
    #[serde(default, rename = "Last Updated", alias = "lastUpdated", deserialize_with = "lenient_string")]
    pub last_updated: Option<String>,
    #[serde(default, rename = "Tax Status", alias = "taxStatus", deserialize_with = "lenient_string")]
    pub tax_status: Option<String>,
    #[serde(flatten)]
    pub common: CommonFields,
}

pub(crate) fn map(p: &DlrPayload) -> Result<MappedFields, NormalizationError> {
    let location = match &p.address {
        Some(address) => address.clone(),
        None => join_present(&[&p.village, &p.district, &p.state]),
    };

    let mut encumbrances = vec![Encumbrance::new(
        "Land Use Restriction",
        LAND_REVENUE_DEPARTMENT,
        EncumbranceStatus::Active,
    )];
    if p
        .tax_status
        .as_deref()
        .is_some_and(|s| s.eq_ignore_ascii_case("pending"))
    {
        encumbrances.push(Encumbrance::new(
            "Land Revenue Arrears",
            LAND_REVENUE_DEPARTMENT,
            EncumbranceStatus::Pending,
        ));
    }

    Ok(MappedFields {
        property_id: required(SourceId::Dlr, "Survey Number", &p.survey_number)?,
        owner_name: required(SourceId::Dlr, "Owner", &p.owner)?,
        registration_number: p.khata_number.clone(),
        property_type: classify_property_type(p.land_type.as_deref()),
        property_location: location,
        registration_date: None,
        market_value: None,
        property_area: p.area.clone(),
        encumbrances,
        last_updated: p.last_updated.as_deref().map(normalize_date),
        default_documents: DOCUMENTS,
    })
}
