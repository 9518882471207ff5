//! Level Policy Module
//!
//! Each level of the multilevel feedback queue owns a [`LevelPolicy`] that
//! answers two questions for the scheduler:
//!
//! 1. Which waiting process should this level dispatch next?
//! 2. After how many consecutive ticks is that dispatch preempted?
//!
//! # Available policies
//!
//! | Policy | Selection | Quantum |
//! |---|---|---|
//! | `FirstComeFirstServed` | head of queue | unbounded |
//! | `RoundRobin` | head of queue | configured |
//! | `ShortestJobFirst` | least `remaining_time`, earliest insertion on ties | configured |
//!
//! A preempted process is re-queued at the tail of its level, so round robin
//! rotation falls out of head-of-queue selection.
//!
//! # Example
//!
//! ```rust
//! use mlfq_simulator_core_rs::{LevelPolicy, Process, Quantum};
//! use std::collections::VecDeque;
//!
//! let queue: VecDeque<Process> = vec![
//!     Process::new(1, 0, 30),
//!     Process::new(2, 1, 8),
//! ]
//! .into();
//!
//! let rr = LevelPolicy::RoundRobin { quantum: Quantum::Finite(4) };
//! let sjf = LevelPolicy::ShortestJobFirst { quantum: Quantum::Finite(4) };
//!
//! assert_eq!(rr.select(&queue), Some(0));
//! assert_eq!(sjf.select(&queue), Some(1));
//! ```

mod quantum;
mod shortest_job;

pub use quantum::Quantum;

use crate::models::Process;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;

/// Dispatch policy of one level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum LevelPolicy {
    /// Head of queue, runs to completion
    FirstComeFirstServed,

    /// Head of queue, preempted when the quantum expires
    RoundRobin { quantum: Quantum },

    /// Shortest remaining time first, preempted when the quantum expires
    ShortestJobFirst { quantum: Quantum },
}

impl LevelPolicy {
    /// Position within `queue` of the process to dispatch next
    ///
    /// Returns `None` only for an empty queue.
    pub fn select(&self, queue: &VecDeque<Process>) -> Option<usize> {
        if queue.is_empty() {
            return None;
        }

        match self {
            LevelPolicy::FirstComeFirstServed | LevelPolicy::RoundRobin { .. } => Some(0),
            LevelPolicy::ShortestJobFirst { .. } => shortest_job::select_shortest(queue),
        }
    }

    /// Quantum enforced on dispatches from this level
    pub fn quantum(&self) -> Quantum {
        match self {
            LevelPolicy::FirstComeFirstServed => Quantum::Unbounded,
            LevelPolicy::RoundRobin { quantum } | LevelPolicy::ShortestJobFirst { quantum } => {
                *quantum
            }
        }
    }

    /// Short name for display
    pub fn label(&self) -> &'static str {
        match self {
            LevelPolicy::FirstComeFirstServed => "FCFS",
            LevelPolicy::RoundRobin { .. } => "RR",
            LevelPolicy::ShortestJobFirst { .. } => "SJF",
        }
    }
}

impl fmt::Display for LevelPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelPolicy::FirstComeFirstServed => write!(f, "FCFS"),
            _ => write!(f, "{} (quantum = {})", self.label(), self.quantum()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn queue_of(bursts: &[usize]) -> VecDeque<Process> {
        bursts
            .iter()
            .enumerate()
            .map(|(i, &burst)| Process::new(i as u32 + 1, i, burst))
            .collect()
    }

    #[test]
    fn test_empty_queue_selects_nothing() {
        let empty = VecDeque::new();
        assert_eq!(LevelPolicy::FirstComeFirstServed.select(&empty), None);
        assert_eq!(
            LevelPolicy::ShortestJobFirst { quantum: Quantum::Finite(2) }.select(&empty),
            None
        );
    }

    #[test]
    fn test_fcfs_and_rr_take_head() {
        let queue = queue_of(&[40, 5, 1]);
        assert_eq!(LevelPolicy::FirstComeFirstServed.select(&queue), Some(0));
        assert_eq!(
            LevelPolicy::RoundRobin { quantum: Quantum::Finite(3) }.select(&queue),
            Some(0)
        );
    }

    #[test]
    fn test_fcfs_never_preempts() {
        assert_eq!(LevelPolicy::FirstComeFirstServed.quantum(), Quantum::Unbounded);
    }

    #[test]
    fn test_display() {
        let rr = LevelPolicy::RoundRobin { quantum: Quantum::Finite(4) };
        assert_eq!(rr.to_string(), "RR (quantum = 4)");
        assert_eq!(LevelPolicy::FirstComeFirstServed.to_string(), "FCFS");
    }

    #[test]
    fn test_policy_json_shape() {
        let policy: LevelPolicy =
            serde_json::from_str(r#"{"type": "ShortestJobFirst", "quantum": 6}"#).unwrap();
        assert_eq!(
            policy,
            LevelPolicy::ShortestJobFirst { quantum: Quantum::Finite(6) }
        );
    }
}
