use std::sync::Arc;

use parcel_core::config::{NormalizationConfig, TrustConfig};
use parcel_core::errors::NormalizationError;
use parcel_core::models::{CanonicalPropertyRecord, RawPayload, SourceId, TrustScore};
use parcel_core::traits::CoordinateAdjuster;
use parcel_core::ParcelConfig;

use crate::coordinates::{HashJitter, Identity};
use crate::payload::PortalPayload;

/// Maps found payloads into [`CanonicalPropertyRecord`]s.
///
/// Holds only immutable configuration, so one instance is shared across all
/// portal tasks of a search.
#[derive(Debug, Clone)]
pub struct Normalizer {
    trust: TrustConfig,
    adjuster: Arc<dyn CoordinateAdjuster>,
}

impl Normalizer {
    pub fn new(trust: TrustConfig) -> Self {
        Self {
            trust,
            adjuster: Arc::new(Identity),
        }
    }

    /// Build from the workspace config, enabling coordinate jitter when asked.
    pub fn from_config(config: &ParcelConfig) -> Self {
        let normalizer = Self::new(config.trust.clone());
        match adjuster_for(&config.normalization) {
            Some(adjuster) => normalizer.with_adjuster(adjuster),
            None => normalizer,
        }
    }

    pub fn with_adjuster(mut self, adjuster: Arc<dyn CoordinateAdjuster>) -> Self {
        self.adjuster = adjuster;
        self
    }

    /// Decode and map a payload, reporting why it could not be mapped.
    pub fn try_normalize(
        &self,
        source: SourceId,
        raw: &RawPayload,
    ) -> Result<CanonicalPropertyRecord, NormalizationError> {
        let payload = PortalPayload::decode(source, raw)?;
        let fields = payload.map()?;
        let common = payload.common();

        let trust = common
            .confidence
            .map(TrustScore::from_signal)
            .unwrap_or_else(|| self.trust.score_for(source));

        let coordinates = common
            .location
            .map(|c| self.adjuster.adjust(source, &fields.property_id, c));

        let source_documents = match &common.documents {
            Some(documents) => documents.clone(),
            None => fields
                .default_documents
                .iter()
                .map(|d| (*d).to_string())
                .collect(),
        };

        Ok(CanonicalPropertyRecord {
            property_id: fields.property_id,
            owner_name: fields.owner_name,
            registration_number: fields.registration_number,
            property_type: fields.property_type,
            property_location: fields.property_location,
            coordinates,
            registration_date: fields.registration_date,
            market_value: fields.market_value,
            property_area: fields.property_area,
            legal_status: common.legal_status.clone(),
            encumbrances: fields.encumbrances,
            source_portal: source,
            last_updated: fields.last_updated,
            trustworthiness_score: trust,
            source_documents,
        })
    }

    /// Map a payload, or `None` when it cannot be mapped. The reason is logged.
    pub fn normalize(&self, source: SourceId, raw: &RawPayload) -> Option<CanonicalPropertyRecord> {
        match self.try_normalize(source, raw) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!(source = %source, error = %e, "payload could not be normalized");
                None
            }
        }
    }

    /// Like [`Normalizer::normalize`] for a source given by name. Unknown
    /// names yield `None`.
    pub fn normalize_named(&self, source: &str, raw: &RawPayload) -> Option<CanonicalPropertyRecord> {
        match source.parse::<SourceId>() {
            Ok(id) => self.normalize(id, raw),
            Err(_) => {
                let e = NormalizationError::UnknownSource {
                    source_id: source.to_string(),
                };
                tracing::warn!(error = %e, "payload could not be normalized");
                None
            }
        }
    }

    pub fn trust(&self) -> &TrustConfig {
        &self.trust
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(TrustConfig::default())
    }
}

fn adjuster_for(config: &NormalizationConfig) -> Option<Arc<dyn CoordinateAdjuster>> {
    config
        .coordinate_jitter
        .then(|| Arc::new(HashJitter::new(config.jitter_degrees)) as Arc<dyn CoordinateAdjuster>)
}
