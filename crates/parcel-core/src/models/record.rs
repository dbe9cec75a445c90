use serde::{Deserialize, Serialize};

use super::query::PropertyType;
use super::source::SourceId;
use super::trust::TrustScore;

/// Geographic position of a property.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    #[serde(alias = "lat")]
    pub latitude: f64,
    #[serde(alias = "lng", alias = "lon")]
    pub longitude: f64,
}

/// Lifecycle state of a recorded charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EncumbranceStatus {
    Active,
    Discharged,
    Pending,
}

/// A claim, charge, or restriction recorded against a property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Encumbrance {
    #[serde(rename = "type")]
    pub kind: String,
    pub holder: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub status: EncumbranceStatus,
}

impl Encumbrance {
    pub fn new(kind: impl Into<String>, holder: impl Into<String>, status: EncumbranceStatus) -> Self {
        Self {
            kind: kind.into(),
            holder: holder.into(),
            value: None,
            date: None,
            status,
        }
    }

    pub fn with_value(mut self, value: Option<String>) -> Self {
        self.value = value.filter(|v| !v.trim().is_empty());
        self
    }

    pub fn with_date(mut self, date: Option<String>) -> Self {
        self.date = date.filter(|d| !d.trim().is_empty());
        self
    }

    pub fn is_active(&self) -> bool {
        self.status == EncumbranceStatus::Active
    }
}

/// The single normalized shape every portal payload is mapped into.
/// Derived once from a found outcome and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalPropertyRecord {
    pub property_id: String,
    pub owner_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration_number: Option<String>,
    pub property_type: PropertyType,
    pub property_location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_area: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legal_status: Option<String>,
    pub encumbrances: Vec<Encumbrance>,
    pub source_portal: SourceId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
    pub trustworthiness_score: TrustScore,
    pub source_documents: Vec<String>,
}
