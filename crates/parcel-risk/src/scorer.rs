use parcel_core::constants::{
    FINANCIAL_RISK_ACTIVE, FINANCIAL_RISK_CLEAR, FINANCIAL_RISK_WEIGHT, LEGAL_RISK_CLEAR,
    LEGAL_RISK_UNCLEAR, LEGAL_RISK_WEIGHT, LEGAL_STATUS_CLEAR, MAX_TRUST_SCORE, TITLE_RISK_WEIGHT,
};

use crate::assessment::{RiskAssessment, RiskLevel};
use crate::subject::RiskSubject;

/// Score a record or view.
///
/// title = 100 - trust, financial = 65 with any active charge else 25,
/// legal = 15 when the legal status is exactly "Clear" else 60. The overall
/// score is the 0.4/0.3/0.3 weighted sum, rounded.
pub fn score(subject: &impl RiskSubject) -> RiskAssessment {
    let title_risk = MAX_TRUST_SCORE - subject.trust().value();
    let financial_risk = if subject.has_active_encumbrance() {
        FINANCIAL_RISK_ACTIVE
    } else {
        FINANCIAL_RISK_CLEAR
    };
    let legal_risk = if subject.legal_status() == Some(LEGAL_STATUS_CLEAR) {
        LEGAL_RISK_CLEAR
    } else {
        LEGAL_RISK_UNCLEAR
    };

    let weighted = f64::from(title_risk) * TITLE_RISK_WEIGHT
        + f64::from(financial_risk) * FINANCIAL_RISK_WEIGHT
        + f64::from(legal_risk) * LEGAL_RISK_WEIGHT;
    let overall_risk = weighted.round().clamp(0.0, f64::from(MAX_TRUST_SCORE)) as u8;

    RiskAssessment {
        title_risk,
        financial_risk,
        legal_risk,
        overall_risk,
        level: RiskLevel::from_score(overall_risk),
    }
}
