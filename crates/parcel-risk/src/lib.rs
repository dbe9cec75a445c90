//! # parcel-risk
//!
//! Heuristic risk scoring. A subject's trustworthiness, active charges and
//! legal status are turned into three component scores and a weighted
//! overall score, each in [0, 100].

pub mod assessment;
pub mod scorer;
pub mod subject;

pub use assessment::{RiskAssessment, RiskLevel};
pub use scorer::score;
pub use subject::RiskSubject;
