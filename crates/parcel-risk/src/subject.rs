use parcel_core::models::{CanonicalPropertyRecord, TrustScore, UnifiedView};

/// Anything the risk scorer can assess.
pub trait RiskSubject {
    fn trust(&self) -> TrustScore;
    fn has_active_encumbrance(&self) -> bool;
    fn legal_status(&self) -> Option<&str>;
}

impl RiskSubject for CanonicalPropertyRecord {
    fn trust(&self) -> TrustScore {
        self.trustworthiness_score
    }

    fn has_active_encumbrance(&self) -> bool {
        self.encumbrances.iter().any(|e| e.is_active())
    }

    fn legal_status(&self) -> Option<&str> {
        self.legal_status.as_deref()
    }
}

/// A unified view is assessed on the primary's trust and legal status, and
/// on the charges reported by every merged source.
impl RiskSubject for UnifiedView {
    fn trust(&self) -> TrustScore {
        self.trustworthiness_score
    }

    fn has_active_encumbrance(&self) -> bool {
        self.merged_encumbrances
            .iter()
            .any(|tagged| tagged.encumbrance.is_active())
    }

    fn legal_status(&self) -> Option<&str> {
        self.legal_status.as_deref()
    }
}
