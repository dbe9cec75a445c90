use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::SourceId;

/// Source selection policy for `auto` queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutingConfig {
    /// Default query priority order.
    pub default_order: Vec<SourceId>,
    /// Source moved to the front for rural properties.
    pub rural_preferred: Option<SourceId>,
    /// Lowercase state name to the source moved to the front for it.
    pub state_affinity: BTreeMap<String, SourceId>,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            default_order: defaults::DEFAULT_SOURCE_ORDER.to_vec(),
            rural_preferred: Some(defaults::DEFAULT_RURAL_PREFERRED),
            state_affinity: defaults::DEFAULT_STATE_AFFINITY
                .iter()
                .map(|(state, source)| (state.to_string(), *source))
                .collect(),
        }
    }
}
