//! Scheduler configuration
//!
//! Mirrors the parameters a user enters before a run: the scheduler variant
//! with its quanta, and the population cap. [`SchedulerConfig::validate`]
//! enforces the entry rules; the engine itself takes its construction input
//! as given.
//!
//! # Example
//!
//! ```rust
//! use mlfq_simulator_core_rs::scheduler::{SchedulerConfig, SchedulerVariant};
//!
//! let config: SchedulerConfig = serde_json::from_str(
//!     r#"{
//!         "variant": { "type": "Uniform", "quanta": [2, 4, null] },
//!         "population_cap": 10,
//!         "rng_seed": 42
//!     }"#,
//! )
//! .unwrap();
//!
//! assert!(config.validate().is_ok());
//! assert_eq!(config.level_policies().len(), 3);
//! ```

use crate::arrivals::{
    ArrivalConfig, DEFAULT_ADMISSION_PROBABILITY, DEFAULT_BURST_MAX, DEFAULT_BURST_MIN,
};
use crate::policy::{LevelPolicy, Quantum};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors, reported before a scheduler is built
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("population cap must be positive")]
    ZeroPopulationCap,

    #[error("at least one level is required")]
    NoLevels,

    #[error("quantum of level {level} must be positive")]
    ZeroQuantum { level: usize },

    #[error("quantum of level {level} ({current}) is smaller than the level above ({previous})")]
    DecreasingQuanta {
        level: usize,
        previous: Quantum,
        current: Quantum,
    },

    #[error("only the deepest level may be unbounded, level {level} is not the deepest")]
    UnboundedAboveDeepest { level: usize },

    #[error("deepest level must have an unbounded quantum, got {0}")]
    BoundedDeepestLevel(Quantum),

    #[error("admission probability {0} outside [0, 1]")]
    InvalidProbability(f64),

    #[error("invalid burst range [{min}, {max}]")]
    InvalidBurstRange { min: usize, max: usize },
}

/// Which queue layout to simulate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SchedulerVariant {
    /// Round robin at every level, one quantum per level
    Uniform { quanta: Vec<Quantum> },

    /// Round robin, then shortest-job-first, then first-come-first-served
    Mixed { q0: usize, q1: usize },
}

/// Arrival parameters; every field falls back to its default
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArrivalParams {
    pub admission_probability: f64,
    pub burst_min: usize,
    pub burst_max: usize,
}

impl Default for ArrivalParams {
    fn default() -> Self {
        Self {
            admission_probability: DEFAULT_ADMISSION_PROBABILITY,
            burst_min: DEFAULT_BURST_MIN,
            burst_max: DEFAULT_BURST_MAX,
        }
    }
}

/// Complete scheduler configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchedulerConfig {
    pub variant: SchedulerVariant,

    /// Number of processes created over the run
    pub population_cap: usize,

    /// Seed for replayable runs; `None` draws a fresh seed
    #[serde(default)]
    pub rng_seed: Option<u64>,

    #[serde(default)]
    pub arrivals: ArrivalParams,
}

impl SchedulerConfig {
    /// Uniform round robin with the given per-level quanta
    pub fn uniform(quanta: Vec<Quantum>, population_cap: usize) -> Self {
        Self {
            variant: SchedulerVariant::Uniform { quanta },
            population_cap,
            rng_seed: None,
            arrivals: ArrivalParams::default(),
        }
    }

    /// Mixed RR / SJF / FCFS layout
    pub fn mixed(q0: usize, q1: usize, population_cap: usize) -> Self {
        Self {
            variant: SchedulerVariant::Mixed { q0, q1 },
            population_cap,
            rng_seed: None,
            arrivals: ArrivalParams::default(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    /// Check every entry rule
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_cap == 0 {
            return Err(ConfigError::ZeroPopulationCap);
        }

        match &self.variant {
            SchedulerVariant::Uniform { quanta } => validate_uniform(quanta)?,
            SchedulerVariant::Mixed { q0, q1 } => {
                if *q0 == 0 {
                    return Err(ConfigError::ZeroQuantum { level: 0 });
                }
                if *q1 == 0 {
                    return Err(ConfigError::ZeroQuantum { level: 1 });
                }
            }
        }

        let params = &self.arrivals;
        if !(0.0..=1.0).contains(&params.admission_probability) {
            return Err(ConfigError::InvalidProbability(params.admission_probability));
        }
        if params.burst_min == 0 || params.burst_min > params.burst_max {
            return Err(ConfigError::InvalidBurstRange {
                min: params.burst_min,
                max: params.burst_max,
            });
        }

        Ok(())
    }

    /// Policy of every level, shallowest first
    pub fn level_policies(&self) -> Vec<LevelPolicy> {
        match &self.variant {
            SchedulerVariant::Uniform { quanta } => quanta
                .iter()
                .map(|&quantum| LevelPolicy::RoundRobin { quantum })
                .collect(),
            SchedulerVariant::Mixed { q0, q1 } => vec![
                LevelPolicy::RoundRobin {
                    quantum: Quantum::Finite(*q0),
                },
                LevelPolicy::ShortestJobFirst {
                    quantum: Quantum::Finite(*q1),
                },
                LevelPolicy::FirstComeFirstServed,
            ],
        }
    }

    pub fn arrival_config(&self) -> ArrivalConfig {
        ArrivalConfig {
            admission_probability: self.arrivals.admission_probability,
            burst_min: self.arrivals.burst_min,
            burst_max: self.arrivals.burst_max,
            population_cap: self.population_cap,
        }
    }
}

fn validate_uniform(quanta: &[Quantum]) -> Result<(), ConfigError> {
    let (deepest, upper) = quanta.split_last().ok_or(ConfigError::NoLevels)?;

    if let Some(level) = quanta.iter().position(|q| *q == Quantum::Finite(0)) {
        return Err(ConfigError::ZeroQuantum { level });
    }

    if let Some(level) = upper.iter().position(|q| q.is_unbounded()) {
        return Err(ConfigError::UnboundedAboveDeepest { level });
    }

    for (level, pair) in quanta.windows(2).enumerate() {
        if pair[1] < pair[0] {
            return Err(ConfigError::DecreasingQuanta {
                level: level + 1,
                previous: pair[0],
                current: pair[1],
            });
        }
    }

    if !deepest.is_unbounded() {
        return Err(ConfigError::BoundedDeepestLevel(*deepest));
    }

    Ok(())
}
