//! Source-specific payload shapes.
//!
//! Each portal speaks its own field vocabulary. Payloads are decoded into a
//! typed variant first and mapped into the canonical record second, so a
//! shape mismatch surfaces as a [`NormalizationError`] rather than as a
//! half-filled record. Field names accept both the portals' display keys
//! ("Owner Name") and their camelCase API keys ("ownerName").

pub mod cersai;
pub mod dlr;
pub mod doris;
pub mod mca21;

use parcel_core::errors::NormalizationError;
use parcel_core::models::{Coordinates, Encumbrance, PropertyType, RawPayload, SourceId};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub use cersai::CersaiPayload;
pub use dlr::DlrPayload;
pub use doris::DorisPayload;
pub use mca21::Mca21Payload;

/// A decoded payload, tagged by the portal that produced it.
#[derive(Debug, Clone, PartialEq)]
pub enum PortalPayload {
    Doris(DorisPayload),
    Dlr(DlrPayload),
    Cersai(CersaiPayload),
    Mca21(Mca21Payload),
}

impl PortalPayload {
    /// Decode a raw payload using the vocabulary of `source`.
    pub fn decode(source: SourceId, raw: &RawPayload) -> Result<Self, NormalizationError> {
        let value = raw.as_value();
        if !value.is_object() {
            return Err(NormalizationError::MalformedPayload {
                source_id: source.to_string(),
                reason: format!("expected a JSON object, got {}", json_kind(value)),
            });
        }

        let malformed = |e: serde_json::Error| NormalizationError::MalformedPayload {
            source_id: source.to_string(),
            reason: e.to_string(),
        };

        Ok(match source {
            SourceId::Doris => Self::Doris(DorisPayload::deserialize(value).map_err(malformed)?),
            SourceId::Dlr => Self::Dlr(DlrPayload::deserialize(value).map_err(malformed)?),
            SourceId::Cersai => Self::Cersai(CersaiPayload::deserialize(value).map_err(malformed)?),
            SourceId::Mca21 => Self::Mca21(Mca21Payload::deserialize(value).map_err(malformed)?),
        })
    }

    pub fn source(&self) -> SourceId {
        match self {
            Self::Doris(_) => SourceId::Doris,
            Self::Dlr(_) => SourceId::Dlr,
            Self::Cersai(_) => SourceId::Cersai,
            Self::Mca21(_) => SourceId::Mca21,
        }
    }

    /// Fields every portal may carry regardless of its vocabulary.
    pub fn common(&self) -> &CommonFields {
        match self {
            Self::Doris(p) => &p.common,
            Self::Dlr(p) => &p.common,
            Self::Cersai(p) => &p.common,
            Self::Mca21(p) => &p.common,
        }
    }

    /// Map into source-independent fields.
    pub(crate) fn map(&self) -> Result<MappedFields, NormalizationError> {
        match self {
            Self::Doris(p) => doris::map(p),
            Self::Dlr(p) => dlr::map(p),
            Self::Cersai(p) => cersai::map(p),
            Self::Mca21(p) => mca21::map(p),
        }
    }
}

/// Optional fields shared by all portal vocabularies.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CommonFields {
    #[serde(default, rename = "Location", alias = "location", deserialize_with = "lenient_coordinates")]
    pub location: Option<Coordinates>,
    #[serde(
        default,
        rename = "Confidence",
        alias = "confidence",
        alias = "trustworthinessScore",
        deserialize_with = "lenient_f64"
    )]
    pub confidence: Option<f64>,
    #[serde(default, rename = "Legal Status", alias = "legalStatus", deserialize_with = "lenient_string")]
    pub legal_status: Option<String>,
    #[serde(default, rename = "sourceDocuments", alias = "Source Documents", deserialize_with = "lenient_strings")]
    pub documents: Option<Vec<String>>,
}

/// Output of a per-source mapping, before trust and coordinates are applied.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct MappedFields {
    pub property_id: String,
    pub owner_name: String,
    pub registration_number: Option<String>,
    pub property_type: PropertyType,
    pub property_location: String,
    pub registration_date: Option<String>,
    pub market_value: Option<String>,
    pub property_area: Option<String>,
    pub encumbrances: Vec<Encumbrance>,
    pub last_updated: Option<String>,
    pub default_documents: &'static [&'static str],
}

pub(crate) fn required(
    source: SourceId,
    field: &'static str,
    value: &Option<String>,
) -> Result<String, NormalizationError> {
    value.clone().ok_or_else(|| NormalizationError::MissingField {
        source_id: source.to_string(),
        field,
    })
}

/// Join the non-blank parts with ", ".
pub(crate) fn join_present(parts: &[&Option<String>]) -> String {
    parts
        .iter()
        .filter_map(|p| p.as_deref())
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn scalar_text(value: Value) -> Option<String> {
    let text = match value {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => return None,
    };
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Accept strings, numbers or booleans as text. Null and blank become `None`.
pub(crate) fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(Value::deserialize(deserializer)?))
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().trim_end_matches('%').trim().parse().ok(),
        _ => None,
    })
}

fn lenient_coordinates<'de, D>(deserializer: D) -> Result<Option<Coordinates>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value::<Coordinates>(value)
        .ok()
        .filter(|c| c.latitude.is_finite() && c.longitude.is_finite()))
}

fn lenient_strings<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => Some(items.into_iter().filter_map(scalar_text).collect()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rejects_non_object_payloads() {
        let err = PortalPayload::decode(SourceId::Dlr, &RawPayload::new(json!([1, 2]))).unwrap_err();
        assert!(matches!(err, NormalizationError::MalformedPayload { .. }));
    }

    #[test]
    fn decodes_into_matching_variant() {
        let raw = RawPayload::new(json!({"CIN": "U123", "Company Name": "Acme"}));
        let payload = PortalPayload::decode(SourceId::Mca21, &raw).unwrap();
        assert_eq!(payload.source(), SourceId::Mca21);
    }

    #[test]
    fn common_fields_are_lenient() {
        let raw = RawPayload::new(json!({
            "Property ID": "DL-1",
            "Owner Name": "Asha",
            "Location": {"lat": 28.6, "lng": 77.2},
            "Confidence": "0.92",
            "Legal Status": "  ",
            "sourceDocuments": ["deed", 7, null]
        }));
        let payload = PortalPayload::decode(SourceId::Doris, &raw).unwrap();
        let common = payload.common();
        assert_eq!(common.location, Some(Coordinates { latitude: 28.6, longitude: 77.2 }));
        assert_eq!(common.confidence, Some(0.92));
        assert_eq!(common.legal_status, None);
        assert_eq!(common.documents, Some(vec!["deed".to_string(), "7".to_string()]));
    }

    #[test]
    fn malformed_location_is_ignored() {
        let raw = RawPayload::new(json!({"Asset ID": "A1", "Borrower Name": "B", "Location": "near the river"}));
        let payload = PortalPayload::decode(SourceId::Cersai, &raw).unwrap();
        assert_eq!(payload.common().location, None);
    }

    #[test]
    fn join_present_skips_blanks() {
        let a = Some("Ward 4".to_string());
        let b = Some(" ".to_string());
        let c = Some("Karnataka".to_string());
        assert_eq!(join_present(&[&a, &b, &None, &c]), "Ward 4, Karnataka");
    }
}
