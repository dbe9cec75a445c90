use chrono::{DateTime, Utc};
use parcel_core::models::{
    CanonicalPropertyRecord, PortalOutcome, TaggedDocument, TaggedEncumbrance, UnifiedView,
};

use crate::priority::MergePriority;

/// Merge the found outcomes into a unified view.
///
/// Returns `None` when no outcome is found. The primary source is the found
/// outcome with the best [`MergePriority`] rank, ties going to the earlier
/// outcome. Encumbrances, documents and `data_sources` follow outcome order
/// and are not deduplicated. The timestamp is supplied by the caller so the
/// merge itself is deterministic.
pub fn merge(
    outcomes: &[PortalOutcome],
    priority: &MergePriority,
    merged_at: DateTime<Utc>,
) -> Option<UnifiedView> {
    let found: Vec<&CanonicalPropertyRecord> =
        outcomes.iter().filter_map(PortalOutcome::record).collect();

    // min_by_key keeps the first of equal keys, so ties go to outcome order.
    let primary = *found
        .iter()
        .min_by_key(|record| priority.rank(record.source_portal))?;

    tracing::debug!(
        primary = %primary.source_portal,
        found = found.len(),
        "merging found outcomes"
    );

    let merged_encumbrances = found
        .iter()
        .flat_map(|record| {
            record.encumbrances.iter().map(|e| TaggedEncumbrance {
                encumbrance: e.clone(),
                origin: record.source_portal,
            })
        })
        .collect();

    let merged_documents = found
        .iter()
        .flat_map(|record| {
            record.source_documents.iter().map(|name| TaggedDocument {
                name: name.clone(),
                origin: record.source_portal,
            })
        })
        .collect();

    Some(UnifiedView {
        primary_source: primary.source_portal,
        property_id: primary.property_id.clone(),
        owner_name: primary.owner_name.clone(),
        registration_number: primary.registration_number.clone(),
        property_type: primary.property_type,
        property_location: primary.property_location.clone(),
        coordinates: primary.coordinates,
        registration_date: primary.registration_date.clone(),
        market_value: primary.market_value.clone(),
        property_area: primary.property_area.clone(),
        legal_status: primary.legal_status.clone(),
        last_updated: primary.last_updated.clone(),
        trustworthiness_score: primary.trustworthiness_score,
        merged_encumbrances,
        merged_documents,
        data_sources: found.iter().map(|r| r.source_portal).collect(),
        merged_at,
    })
}
