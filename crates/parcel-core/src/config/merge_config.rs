use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::SourceId;

/// Merge configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeConfig {
    /// Total order used to pick the primary record, most trusted first.
    pub priority: Vec<SourceId>,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            priority: defaults::DEFAULT_MERGE_PRIORITY.to_vec(),
        }
    }
}
