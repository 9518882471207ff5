//! Snapshot - read-only view of the scheduler between ticks
//!
//! A presentation layer renders queues, the running process and the
//! completed table from a [`SchedulerSnapshot`]. Snapshots are plain data,
//! serializable to JSON, and never feed back into the engine.

use crate::models::{Process, ProcessId};
use crate::policy::Quantum;
use crate::scheduler::engine::Scheduler;
use serde::{Deserialize, Serialize};

// ============================================================================
// Snapshot Structures
// ============================================================================

/// Complete scheduler state at a tick boundary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchedulerSnapshot {
    pub current_time: usize,
    pub is_paused: bool,

    /// Level queues, shallowest first
    pub levels: Vec<LevelSnapshot>,

    pub running: Option<ProcessSnapshot>,
    pub ticks_in_current_dispatch: usize,

    /// Completed processes, in completion order
    pub completed: Vec<ProcessSnapshot>,

    pub generated_count: usize,
    pub population_cap: usize,
}

/// One level queue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelSnapshot {
    pub index: usize,

    /// Short policy name ("RR", "SJF", "FCFS")
    pub policy: String,

    pub quantum: Quantum,

    /// Waiting processes in queue order
    pub processes: Vec<ProcessSnapshot>,
}

/// Process state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessSnapshot {
    pub pid: ProcessId,
    pub arrival_time: usize,
    pub burst_time: usize,
    pub remaining_time: usize,
    pub current_level: usize,

    /// Executed fraction of the burst, for progress bars
    pub progress: f64,

    pub completion_time: Option<usize>,
    pub turnaround_time: Option<usize>,
    pub waiting_time: Option<usize>,
}

impl From<&Process> for ProcessSnapshot {
    fn from(process: &Process) -> Self {
        ProcessSnapshot {
            pid: process.id(),
            arrival_time: process.arrival_time(),
            burst_time: process.burst_time(),
            remaining_time: process.remaining_time(),
            current_level: process.current_level(),
            progress: process.progress(),
            completion_time: process.completion_time(),
            turnaround_time: process.turnaround_time(),
            waiting_time: process.waiting_time(),
        }
    }
}

impl SchedulerSnapshot {
    /// Capture the current state of `scheduler`
    pub fn capture(scheduler: &Scheduler) -> Self {
        let levels = scheduler
            .level_policies()
            .iter()
            .zip(scheduler.queues().levels())
            .enumerate()
            .map(|(index, (policy, queue))| LevelSnapshot {
                index,
                policy: policy.label().to_string(),
                quantum: policy.quantum(),
                processes: queue.iter().map(ProcessSnapshot::from).collect(),
            })
            .collect();

        SchedulerSnapshot {
            current_time: scheduler.current_time(),
            is_paused: scheduler.is_paused(),
            levels,
            running: scheduler.running().map(ProcessSnapshot::from),
            ticks_in_current_dispatch: scheduler.ticks_in_current_dispatch(),
            completed: scheduler
                .completed()
                .iter()
                .map(ProcessSnapshot::from)
                .collect(),
            generated_count: scheduler.generated_count(),
            population_cap: scheduler.population_cap(),
        }
    }

    /// Serialize to a JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parse a snapshot previously produced by [`to_json`](Self::to_json)
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Processes waiting across all levels
    pub fn total_waiting(&self) -> usize {
        self.levels.iter().map(|level| level.processes.len()).sum()
    }
}
