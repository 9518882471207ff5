//! Level queues of the multilevel feedback queue
//!
//! # Critical Invariants
//!
//! 1. The number of levels is fixed at construction
//! 2. Within a level, order is insertion order (FCFS/RR tie-breaking)
//! 3. A process waiting at level `i` has `current_level() == i`

use crate::models::process::Process;
use std::collections::VecDeque;

/// Ordered sequence of per-level waiting queues
///
/// # Example
/// ```
/// use mlfq_simulator_core_rs::{Process, QueueBank};
///
/// let mut bank = QueueBank::new(3);
/// bank.enqueue(Process::new(1, 0, 10));
/// bank.enqueue(Process::new(2, 1, 4));
///
/// assert_eq!(bank.level(0).len(), 2);
/// assert_eq!(bank.first_non_empty(), Some(0));
/// assert_eq!(bank.total_waiting(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct QueueBank {
    levels: Vec<VecDeque<Process>>,
}

impl QueueBank {
    /// Create `num_levels` empty levels
    ///
    /// # Panics
    /// Panics if `num_levels` is zero
    pub fn new(num_levels: usize) -> Self {
        assert!(num_levels > 0, "queue bank needs at least one level");
        Self {
            levels: (0..num_levels).map(|_| VecDeque::new()).collect(),
        }
    }

    pub fn num_levels(&self) -> usize {
        self.levels.len()
    }

    /// Index of the deepest (lowest priority) level
    pub fn deepest_level(&self) -> usize {
        self.levels.len() - 1
    }

    /// Append a process at the tail of its current level
    ///
    /// # Panics
    /// Panics if the process level is out of range
    pub fn enqueue(&mut self, process: Process) {
        let level = process.current_level();
        assert!(
            level < self.levels.len(),
            "process {} has level {} but only {} levels exist",
            process.id(),
            level,
            self.levels.len()
        );
        self.levels[level].push_back(process);
    }

    /// Remove the process at `position` within `level`
    pub fn take(&mut self, level: usize, position: usize) -> Option<Process> {
        self.levels.get_mut(level)?.remove(position)
    }

    /// Waiting processes at `level`, in insertion order
    ///
    /// # Panics
    /// Panics if `level` is out of range
    pub fn level(&self, level: usize) -> &VecDeque<Process> {
        &self.levels[level]
    }

    /// All levels, shallowest first
    pub fn levels(&self) -> &[VecDeque<Process>] {
        &self.levels
    }

    /// Shallowest level with at least one waiting process
    pub fn first_non_empty(&self) -> Option<usize> {
        self.levels.iter().position(|queue| !queue.is_empty())
    }

    pub fn total_waiting(&self) -> usize {
        self.levels.iter().map(VecDeque::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.iter().all(VecDeque::is_empty)
    }

    /// Iterate over every waiting process, shallowest level first
    pub fn iter(&self) -> impl Iterator<Item = &Process> {
        self.levels.iter().flatten()
    }

    /// Drop every waiting process
    pub fn clear(&mut self) {
        self.levels.iter_mut().for_each(VecDeque::clear);
    }
}
