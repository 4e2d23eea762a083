//! Synthetic workload generation.
//!
//! Bernoulli arrivals: on every tick in `[0, ticks)` a process arrives
//! with probability `arrival_probability`, with an integer burst drawn
//! uniformly from `[min_burst, max_burst]`. Seeded, so the same config
//! always yields the same workload.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::models::ProcessDescriptor;

/// Workload generator settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkloadConfig {
    /// Number of arrival ticks.
    pub ticks: u64,
    /// Per-tick arrival probability (clamped to 0.0..=1.0).
    pub arrival_probability: f64,
    /// Smallest burst.
    pub min_burst: u64,
    /// Largest burst.
    pub max_burst: u64,
    /// RNG seed.
    pub seed: u64,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            ticks: 100,
            arrival_probability: 0.3,
            min_burst: 1,
            max_burst: 10,
            seed: 0,
        }
    }
}

impl WorkloadConfig {
    /// Creates the default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of arrival ticks.
    pub fn with_ticks(mut self, ticks: u64) -> Self {
        self.ticks = ticks;
        self
    }

    /// Sets the per-tick arrival probability.
    pub fn with_arrival_probability(mut self, p: f64) -> Self {
        self.arrival_probability = p;
        self
    }

    /// Sets the inclusive burst range. Bounds are swapped if reversed;
    /// a zero lower bound is raised to 1.
    pub fn with_burst_range(mut self, min: u64, max: u64) -> Self {
        let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
        self.min_burst = lo.max(1);
        self.max_burst = hi.max(1);
        self
    }

    /// Sets the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Generates process descriptors named `P1`, `P2`, ... in arrival order.
pub fn generate(config: &WorkloadConfig) -> Vec<ProcessDescriptor> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let p_arrival = config.arrival_probability.clamp(0.0, 1.0);
    let min_burst = config.min_burst.max(1);
    let max_burst = config.max_burst.max(min_burst);

    let mut processes = Vec::new();
    for tick in 0..config.ticks {
        if rng.random::<f64>() < p_arrival {
            let burst = rng.random_range(min_burst..=max_burst);
            processes.push(ProcessDescriptor::new(
                format!("P{}", processes.len() + 1),
                tick as f64,
                burst as f64,
            ));
        }
    }

    processes
}
