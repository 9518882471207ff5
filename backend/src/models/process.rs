//! Process model
//!
//! One simulated job. Each process has:
//! - A sequential id assigned by the arrival generator
//! - Arrival tick and total burst (CPU ticks required)
//! - Remaining ticks and current queue level
//! - Completion timings, stamped exactly once when the last tick runs

use serde::{Deserialize, Serialize};

/// Process identifier, sequential from 1 within a run
pub type ProcessId = u32;

/// Timings derived when a process finishes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionStats {
    /// Tick of the decrement that brought `remaining_time` to zero
    pub completion_time: usize,

    /// `completion_time - arrival_time`
    pub turnaround_time: usize,

    /// `turnaround_time - burst_time`
    pub waiting_time: usize,
}

/// A simulated unit of work
///
/// # Example
/// ```
/// use mlfq_simulator_core_rs::Process;
///
/// let p = Process::new(1, 0, 12);
/// assert_eq!(p.remaining_time(), 12);
/// assert_eq!(p.current_level(), 0);
/// assert!(!p.is_complete());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Process {
    id: ProcessId,

    /// Tick at which the process entered level 0
    arrival_time: usize,

    /// Total CPU ticks required
    burst_time: usize,

    /// CPU ticks still required
    remaining_time: usize,

    /// Index of the level queue the process belongs to
    current_level: usize,

    /// Set once, on completion
    completion: Option<CompletionStats>,
}

impl Process {
    /// Create a new process waiting at level 0
    ///
    /// # Panics
    /// Panics if `burst_time` is zero
    pub fn new(id: ProcessId, arrival_time: usize, burst_time: usize) -> Self {
        assert!(burst_time >= 1, "burst_time must be at least 1");

        Self {
            id,
            arrival_time,
            burst_time,
            remaining_time: burst_time,
            current_level: 0,
            completion: None,
        }
    }

    pub fn id(&self) -> ProcessId {
        self.id
    }

    pub fn arrival_time(&self) -> usize {
        self.arrival_time
    }

    pub fn burst_time(&self) -> usize {
        self.burst_time
    }

    pub fn remaining_time(&self) -> usize {
        self.remaining_time
    }

    pub fn current_level(&self) -> usize {
        self.current_level
    }

    pub fn completion(&self) -> Option<&CompletionStats> {
        self.completion.as_ref()
    }

    pub fn completion_time(&self) -> Option<usize> {
        self.completion.map(|c| c.completion_time)
    }

    pub fn turnaround_time(&self) -> Option<usize> {
        self.completion.map(|c| c.turnaround_time)
    }

    pub fn waiting_time(&self) -> Option<usize> {
        self.completion.map(|c| c.waiting_time)
    }

    pub fn is_complete(&self) -> bool {
        self.completion.is_some()
    }

    /// Fraction of the burst already executed, in `[0.0, 1.0]`
    ///
    /// # Example
    /// ```
    /// use mlfq_simulator_core_rs::Process;
    ///
    /// let mut p = Process::new(1, 0, 4);
    /// p.run_one_tick();
    /// assert_eq!(p.progress(), 0.25);
    /// ```
    pub fn progress(&self) -> f64 {
        (self.burst_time - self.remaining_time) as f64 / self.burst_time as f64
    }

    /// Consume one tick of CPU
    ///
    /// # Panics
    /// Panics if the process has no remaining work
    pub fn run_one_tick(&mut self) {
        assert!(self.remaining_time > 0, "process {} already finished", self.id);
        self.remaining_time -= 1;
    }

    /// Move one level deeper, unless already at `deepest_level`
    ///
    /// Returns true if the level changed.
    pub fn demote(&mut self, deepest_level: usize) -> bool {
        if self.current_level < deepest_level {
            self.current_level += 1;
            true
        } else {
            false
        }
    }

    /// Stamp completion timings at tick `now`
    ///
    /// # Panics
    /// Panics if work remains, if already stamped, or if `now` would make the
    /// waiting time negative
    pub fn complete(&mut self, now: usize) -> CompletionStats {
        assert_eq!(self.remaining_time, 0, "process {} still has work", self.id);
        assert!(self.completion.is_none(), "process {} completed twice", self.id);

        let turnaround_time = now - self.arrival_time;
        assert!(
            turnaround_time >= self.burst_time,
            "process {} finished faster than its burst",
            self.id
        );

        let stats = CompletionStats {
            completion_time: now,
            turnaround_time,
            waiting_time: turnaround_time - self.burst_time,
        };
        self.completion = Some(stats);
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "burst_time must be at least 1")]
    fn test_zero_burst_panics() {
        Process::new(1, 0, 0);
    }

    #[test]
    fn test_demote_stops_at_deepest_level() {
        let mut p = Process::new(1, 0, 10);
        assert!(p.demote(2));
        assert!(p.demote(2));
        assert!(!p.demote(2));
        assert_eq!(p.current_level(), 2);
    }

    #[test]
    fn test_complete_derives_timings() {
        let mut p = Process::new(3, 4, 2);
        p.run_one_tick();
        p.run_one_tick();

        let stats = p.complete(9);
        assert_eq!(stats.completion_time, 9);
        assert_eq!(stats.turnaround_time, 5);
        assert_eq!(stats.waiting_time, 3);
        assert_eq!(p.waiting_time(), Some(3));
        assert!(p.is_complete());
    }

    #[test]
    #[should_panic(expected = "still has work")]
    fn test_complete_with_remaining_work_panics() {
        let mut p = Process::new(1, 0, 3);
        p.complete(5);
    }

    #[test]
    #[should_panic(expected = "already finished")]
    fn test_run_past_zero_panics() {
        let mut p = Process::new(1, 0, 1);
        p.run_one_tick();
        p.run_one_tick();
    }
}
