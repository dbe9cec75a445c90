use std::fmt;

use parcel_core::constants::{LOW_RISK_BELOW, MODERATE_RISK_BELOW};
use serde::{Deserialize, Serialize};

/// Banded risk label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    /// Below 30 is low, below 60 moderate, anything else high.
    pub fn from_score(score: u8) -> Self {
        if score < LOW_RISK_BELOW {
            Self::Low
        } else if score < MODERATE_RISK_BELOW {
            Self::Moderate
        } else {
            Self::High
        }
    }

    /// Human readable label, e.g. "Moderate Risk".
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low Risk",
            Self::Moderate => "Moderate Risk",
            Self::High => "High Risk",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Component and overall risk scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    pub title_risk: u8,
    pub financial_risk: u8,
    pub legal_risk: u8,
    pub overall_risk: u8,
    pub level: RiskLevel,
}

impl RiskAssessment {
    pub fn title_level(&self) -> RiskLevel {
        RiskLevel::from_score(self.title_risk)
    }

    pub fn financial_level(&self) -> RiskLevel {
        RiskLevel::from_score(self.financial_risk)
    }

    pub fn legal_level(&self) -> RiskLevel {
        RiskLevel::from_score(self.legal_risk)
    }
}
