use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::MAX_TRUST_SCORE;

/// Trustworthiness score clamped to [0, 100].
/// Represents how much the pipeline trusts a record's source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub struct TrustScore(u8);

impl TrustScore {
    /// Create a new TrustScore, clamping to [0, 100].
    pub fn new(value: u8) -> Self {
        Self(value.min(MAX_TRUST_SCORE))
    }

    /// Build from a float confidence signal. Values in [0.0, 1.0] are read
    /// as fractions, anything larger as a percentage.
    pub fn from_signal(value: f64) -> Self {
        if !value.is_finite() || value <= 0.0 {
            return Self(0);
        }
        let percent = if value <= 1.0 { value * 100.0 } else { value };
        Self(percent.round().min(f64::from(MAX_TRUST_SCORE)) as u8)
    }

    /// Get the raw value.
    pub fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for TrustScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u8> for TrustScore {
    fn from(value: u8) -> Self {
        Self::new(value)
    }
}

impl From<TrustScore> for u8 {
    fn from(score: TrustScore) -> Self {
        score.0
    }
}
