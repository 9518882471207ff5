//! MLFQ Simulator Core - Rust Engine
//!
//! Tick-driven simulation of multilevel feedback queue CPU scheduling over a
//! synthetic process population.
//!
//! # Architecture
//!
//! - **core**: Simulated time
//! - **models**: Domain types (Process, QueueBank, Event)
//! - **policy**: Per-level dispatch policies (RR, SJF, FCFS)
//! - **arrivals**: Stochastic admission under a population cap
//! - **metrics**: Completed processes and aggregate timings
//! - **scheduler**: The tick loop, configuration and snapshots
//! - **rng**: Injectable random sources
//!
//! # Critical Invariants
//!
//! 1. Every process is in exactly one of {a level queue, the CPU, the completed set}
//! 2. Levels only ever deepen (demotion, no aging)
//! 3. All randomness flows through `RandomSource` (seeded runs replay exactly)

// Module declarations
pub mod arrivals;
pub mod core;
pub mod metrics;
pub mod models;
pub mod policy;
pub mod rng;
pub mod scheduler;

// Re-exports for convenience
pub use arrivals::{ArrivalConfig, ArrivalGenerator};
pub use core::time::SimClock;
pub use metrics::{MetricsCollector, MetricsSummary};
pub use models::{
    event::{Event, EventLog},
    process::{CompletionStats, Process, ProcessId},
    queue_bank::QueueBank,
};
pub use policy::{LevelPolicy, Quantum};
pub use rng::{RandomSource, RngManager, SequenceRandom};
pub use scheduler::{
    ConfigError, Scheduler, SchedulerConfig, SchedulerSnapshot, SchedulerVariant,
    SimulationError, TickResult,
};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn mlfq_simulator_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::scheduler::PyScheduler>()?;
    Ok(())
}
