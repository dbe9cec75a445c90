use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Fan-out configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregationConfig {
    /// Deadline for each portal call, after which the slot settles as unavailable.
    pub per_call_timeout_ms: u64,
}

impl AggregationConfig {
    pub fn per_call_timeout(&self) -> Duration {
        Duration::from_millis(self.per_call_timeout_ms)
    }
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            per_call_timeout_ms: defaults::DEFAULT_PER_CALL_TIMEOUT_MS,
        }
    }
}
