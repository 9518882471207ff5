//! Domain models for the scheduling simulator

pub mod event;
pub mod process;
pub mod queue_bank;

// Re-exports
pub use event::{Event, EventLog};
pub use process::{CompletionStats, Process, ProcessId};
pub use queue_bank::QueueBank;
