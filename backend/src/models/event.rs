//! Event logging for simulation replay and inspection.
//!
//! Every state change the scheduler makes during a tick is captured as an
//! [`Event`]. Events enable:
//! - Deterministic replay checks (same seed → same log)
//! - Debugging (which process ran when, and why it left the CPU)
//! - Rendering (a presentation layer can animate transitions)
//!
//! # Event Types
//!
//! - **Arrival**: process admitted into level 0
//! - **Dispatch**: process moved from a level queue onto the CPU
//! - **Preemption**: quantum expired, process re-queued (possibly demoted)
//! - **Completion**: process finished and was retired to the metrics
//!
//! # Example
//!
//! ```rust
//! use mlfq_simulator_core_rs::models::Event;
//!
//! let event = Event::Arrival {
//!     tick: 10,
//!     pid: 4,
//!     burst_time: 17,
//! };
//!
//! assert_eq!(event.tick(), 10);
//! assert_eq!(event.pid(), 4);
//! ```

use crate::models::process::ProcessId;
use serde::{Deserialize, Serialize};

/// Simulation event capturing a state change.
///
/// Events are logged in the order they occur within a tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    /// New process admitted at the tail of level 0
    Arrival {
        tick: usize,
        pid: ProcessId,
        burst_time: usize,
    },

    /// Process selected by a level policy to run
    Dispatch {
        tick: usize,
        pid: ProcessId,
        level: usize,
        remaining_time: usize,
    },

    /// Quantum expired before the process finished
    ///
    /// `from_level == to_level` when the process already sat at the deepest
    /// level and was only rotated to the tail.
    Preemption {
        tick: usize,
        pid: ProcessId,
        from_level: usize,
        to_level: usize,
        remaining_time: usize,
    },

    /// Process ran its last tick
    Completion {
        tick: usize,
        pid: ProcessId,
        turnaround_time: usize,
        waiting_time: usize,
    },
}

impl Event {
    /// Get the tick number when this event occurred
    pub fn tick(&self) -> usize {
        match self {
            Event::Arrival { tick, .. }
            | Event::Dispatch { tick, .. }
            | Event::Preemption { tick, .. }
            | Event::Completion { tick, .. } => *tick,
        }
    }

    /// Get the process the event relates to
    pub fn pid(&self) -> ProcessId {
        match self {
            Event::Arrival { pid, .. }
            | Event::Dispatch { pid, .. }
            | Event::Preemption { pid, .. }
            | Event::Completion { pid, .. } => *pid,
        }
    }

    /// Get a short description of the event type
    pub fn event_type(&self) -> &'static str {
        match self {
            Event::Arrival { .. } => "Arrival",
            Event::Dispatch { .. } => "Dispatch",
            Event::Preemption { .. } => "Preemption",
            Event::Completion { .. } => "Completion",
        }
    }

    /// True for a preemption that moved the process one level deeper
    pub fn is_demotion(&self) -> bool {
        matches!(self, Event::Preemption { from_level, to_level, .. } if to_level > from_level)
    }
}

/// Event log for storing and querying simulation events.
///
/// This is a simple wrapper around Vec<Event> with convenience methods.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventLog {
    events: Vec<Event>,
}

impl EventLog {
    /// Create a new empty event log
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Add an event to the log
    pub fn log(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Get all events
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Get events for a specific tick
    pub fn events_at_tick(&self, tick: usize) -> Vec<&Event> {
        self.events.iter().filter(|e| e.tick() == tick).collect()
    }

    /// Get events of a specific type
    pub fn events_of_type(&self, event_type: &str) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| e.event_type() == event_type)
            .collect()
    }

    /// Get the history of one process, in order
    pub fn events_for_process(&self, pid: ProcessId) -> Vec<&Event> {
        self.events.iter().filter(|e| e.pid() == pid).collect()
    }

    /// Clear all events
    pub fn clear(&mut self) {
        self.events.clear();
    }
}
