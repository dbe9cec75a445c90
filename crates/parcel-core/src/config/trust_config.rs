use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::{SourceId, TrustScore};

/// Fixed trustworthiness score assigned per source when the payload does not
/// carry its own confidence signal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrustConfig {
    pub scores: BTreeMap<SourceId, u8>,
}

impl TrustConfig {
    pub fn score_for(&self, source: SourceId) -> TrustScore {
        TrustScore::new(
            self.scores
                .get(&source)
                .copied()
                .unwrap_or_else(|| defaults::default_trust(source)),
        )
    }
}

impl Default for TrustConfig {
    fn default() -> Self {
        Self {
            scores: SourceId::ALL
                .into_iter()
                .map(|s| (s, defaults::default_trust(s)))
                .collect(),
        }
    }
}
