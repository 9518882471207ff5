//! Arrival generation module for stochastic process admission.
//!
//! Each tick, while fewer than `population_cap` processes have been created,
//! the generator runs one Bernoulli trial. On success it creates a process
//! with a uniformly drawn burst time.
//!
//! # Key Principles
//!
//! 1. **Bounded population**: never more than `population_cap` admissions
//! 2. **One trial per tick**: independent across ticks
//! 3. **No draws past the cap**: once the cap is reached the random source
//!    is left untouched
//! 4. **Injected randomness**: same source state → same arrivals
//!
//! # Example
//!
//! ```
//! use mlfq_simulator_core_rs::arrivals::{ArrivalConfig, ArrivalGenerator};
//! use mlfq_simulator_core_rs::rng::SequenceRandom;
//!
//! let mut rng = SequenceRandom::admit_at(&[0], &[20]);
//! let mut generator = ArrivalGenerator::new(ArrivalConfig::with_cap(1));
//!
//! let process = generator.maybe_admit(0, &mut rng).unwrap();
//! assert_eq!(process.id(), 1);
//! assert_eq!(process.burst_time(), 20);
//! assert!(generator.maybe_admit(1, &mut rng).is_none());
//! ```

use crate::models::{Process, ProcessId};
use crate::rng::RandomSource;
use serde::{Deserialize, Serialize};

/// Probability of admitting a process on a given tick
pub const DEFAULT_ADMISSION_PROBABILITY: f64 = 0.1;

/// Shortest burst drawn for a new process (inclusive)
pub const DEFAULT_BURST_MIN: usize = 5;

/// Longest burst drawn for a new process (inclusive)
pub const DEFAULT_BURST_MAX: usize = 50;

/// Configuration for process arrivals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrivalConfig {
    /// Bernoulli success probability per tick
    pub admission_probability: f64,

    /// Burst time range, inclusive on both ends
    pub burst_min: usize,
    pub burst_max: usize,

    /// Total number of processes created over a run
    pub population_cap: usize,
}

impl ArrivalConfig {
    /// Default admission parameters with the given population cap
    pub fn with_cap(population_cap: usize) -> Self {
        Self {
            admission_probability: DEFAULT_ADMISSION_PROBABILITY,
            burst_min: DEFAULT_BURST_MIN,
            burst_max: DEFAULT_BURST_MAX,
            population_cap,
        }
    }
}

/// Generator for process arrivals.
#[derive(Debug, Clone)]
pub struct ArrivalGenerator {
    config: ArrivalConfig,

    /// Processes created so far
    generated_count: usize,

    /// Next process ID
    next_pid: ProcessId,
}

impl ArrivalGenerator {
    pub fn new(config: ArrivalConfig) -> Self {
        Self {
            config,
            generated_count: 0,
            next_pid: 1,
        }
    }

    /// Run this tick's admission trial.
    ///
    /// # Arguments
    ///
    /// * `current_time` - Tick stamped as the arrival time
    /// * `rng` - Random source for the trial and the burst draw
    ///
    /// # Returns
    ///
    /// The admitted process, which the caller places at the tail of level 0
    pub fn maybe_admit(
        &mut self,
        current_time: usize,
        rng: &mut dyn RandomSource,
    ) -> Option<Process> {
        if self.is_exhausted() {
            return None;
        }

        if rng.next_f64() >= self.config.admission_probability {
            return None;
        }

        let burst_time = rng.range_inclusive(self.config.burst_min, self.config.burst_max);
        let process = Process::new(self.next_pid, current_time, burst_time);

        self.next_pid += 1;
        self.generated_count += 1;

        Some(process)
    }

    /// Whether the population cap has been reached
    pub fn is_exhausted(&self) -> bool {
        self.generated_count >= self.config.population_cap
    }

    pub fn generated_count(&self) -> usize {
        self.generated_count
    }

    pub fn population_cap(&self) -> usize {
        self.config.population_cap
    }

    pub fn config(&self) -> &ArrivalConfig {
        &self.config
    }
}
