use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

use parcel_core::config::SimulationConfig;
use parcel_core::models::SourceId;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// How a simulated call resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlannedOutcome {
    Found,
    NotFound,
    Unavailable,
}

/// One planned call: its outcome, latency, and a variant number that seeds
/// the generated payload's details.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaultPlan {
    pub outcome: PlannedOutcome,
    pub latency: Duration,
    pub variant: u64,
}

impl FaultPlan {
    pub fn new(outcome: PlannedOutcome, latency: Duration) -> Self {
        Self {
            outcome,
            latency,
            variant: 0,
        }
    }

    pub fn with_variant(mut self, variant: u64) -> Self {
        self.variant = variant;
        self
    }
}

/// Decides the fate of each simulated portal call.
pub trait FaultInjector: Send + Sync + fmt::Debug {
    fn plan(&self, source: SourceId) -> FaultPlan;
}

/// Random faults at configured rates. Reproducible when seeded.
pub struct SeededFaults {
    rng: Mutex<StdRng>,
    unavailable_rate: f64,
    not_found_rate: f64,
    min_latency_ms: u64,
    max_latency_ms: u64,
}

impl SeededFaults {
    pub fn new(config: &SimulationConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            rng: Mutex::new(rng),
            unavailable_rate: config.unavailable_rate.clamp(0.0, 1.0),
            not_found_rate: config.not_found_rate.clamp(0.0, 1.0),
            min_latency_ms: config.min_latency_ms.min(config.max_latency_ms),
            max_latency_ms: config.max_latency_ms.max(config.min_latency_ms),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(&SimulationConfig {
            seed: Some(seed),
            ..SimulationConfig::default()
        })
    }
}

impl fmt::Debug for SeededFaults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeededFaults")
            .field("unavailable_rate", &self.unavailable_rate)
            .field("not_found_rate", &self.not_found_rate)
            .field("min_latency_ms", &self.min_latency_ms)
            .field("max_latency_ms", &self.max_latency_ms)
            .finish_non_exhaustive()
    }
}

impl FaultInjector for SeededFaults {
    fn plan(&self, _source: SourceId) -> FaultPlan {
        let mut rng = self.rng.lock();
        // Not-found is drawn only for calls that did not fail.
        let outcome = if rng.gen::<f64>() < self.unavailable_rate {
            PlannedOutcome::Unavailable
        } else if rng.gen::<f64>() < self.not_found_rate {
            PlannedOutcome::NotFound
        } else {
            PlannedOutcome::Found
        };
        let latency = Duration::from_millis(rng.gen_range(self.min_latency_ms..=self.max_latency_ms));
        FaultPlan {
            outcome,
            latency,
            variant: rng.gen(),
        }
    }
}

/// Fixed plan per source. Sources without a script use the fallback.
#[derive(Debug, Clone)]
pub struct ScriptedFaults {
    plans: HashMap<SourceId, FaultPlan>,
    fallback: FaultPlan,
}

impl ScriptedFaults {
    /// Every source found immediately.
    pub fn all_found() -> Self {
        Self::uniform(FaultPlan::new(PlannedOutcome::Found, Duration::ZERO))
    }

    pub fn uniform(fallback: FaultPlan) -> Self {
        Self {
            plans: HashMap::new(),
            fallback,
        }
    }

    pub fn with(mut self, source: SourceId, outcome: PlannedOutcome, latency: Duration) -> Self {
        self.plans.insert(source, FaultPlan::new(outcome, latency));
        self
    }
}

impl FaultInjector for ScriptedFaults {
    fn plan(&self, source: SourceId) -> FaultPlan {
        self.plans.get(&source).copied().unwrap_or(self.fallback)
    }
}
