//! Scheduler - the tick-driven multilevel feedback queue
//!
//! See `engine.rs` for the tick loop, `config.rs` for validated
//! construction input and `snapshot.rs` for the read-only view.

pub mod config;
pub mod engine;
pub mod snapshot;

#[cfg(test)]
mod tests;

// Re-export main types for convenience
pub use config::{ArrivalParams, ConfigError, SchedulerConfig, SchedulerVariant};
pub use engine::{Scheduler, SimulationError, TickResult};
pub use snapshot::{LevelSnapshot, ProcessSnapshot, SchedulerSnapshot};
