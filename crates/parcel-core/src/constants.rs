/// Parcel system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of digits in a valid postal index number.
pub const PINCODE_LENGTH: usize = 6;

/// Upper bound of a trustworthiness score.
pub const MAX_TRUST_SCORE: u8 = 100;

/// Weights of the overall risk score.
pub const TITLE_RISK_WEIGHT: f64 = 0.4;
pub const FINANCIAL_RISK_WEIGHT: f64 = 0.3;
pub const LEGAL_RISK_WEIGHT: f64 = 0.3;

/// Financial risk with and without an active encumbrance.
pub const FINANCIAL_RISK_ACTIVE: u8 = 65;
pub const FINANCIAL_RISK_CLEAR: u8 = 25;

/// Legal risk with and without a "Clear" legal status.
pub const LEGAL_RISK_CLEAR: u8 = 15;
pub const LEGAL_RISK_UNCLEAR: u8 = 60;

/// Legal status value that lowers legal risk.
pub const LEGAL_STATUS_CLEAR: &str = "Clear";

/// Risk level thresholds (exclusive upper bounds).
pub const LOW_RISK_BELOW: u8 = 30;
pub const MODERATE_RISK_BELOW: u8 = 60;
