use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::query::PropertyType;
use super::record::{Coordinates, Encumbrance};
use super::source::SourceId;
use super::trust::TrustScore;

/// An encumbrance together with the portal that reported it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedEncumbrance {
    #[serde(flatten)]
    pub encumbrance: Encumbrance,
    pub origin: SourceId,
}

/// A document tag together with the portal that reported it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedDocument {
    pub name: String,
    pub origin: SourceId,
}

/// Merged record built from every portal that found a match.
///
/// Scalar fields come from the primary source only; encumbrances and
/// documents are the provenance-tagged union across all found sources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnifiedView {
    pub primary_source: SourceId,
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
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
    pub trustworthiness_score: TrustScore,
    pub merged_encumbrances: Vec<TaggedEncumbrance>,
    pub merged_documents: Vec<TaggedDocument>,
    pub data_sources: Vec<SourceId>,
    pub merged_at: DateTime<Utc>,
}
