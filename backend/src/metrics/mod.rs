//! Completion metrics
//!
//! Completed processes are retained in completion order for the whole run.
//! Nothing is evicted.

use crate::models::{Process, ProcessId};
use serde::{Deserialize, Serialize};

/// Ordered record of every finished process
///
/// # Example
/// ```
/// use mlfq_simulator_core_rs::{MetricsCollector, Process};
///
/// let mut p = Process::new(1, 2, 3);
/// for _ in 0..3 {
///     p.run_one_tick();
/// }
/// p.complete(8);
///
/// let mut metrics = MetricsCollector::new();
/// metrics.record(p);
///
/// let summary = metrics.summary(10);
/// assert_eq!(summary.completed, 1);
/// assert_eq!(summary.average_turnaround, Some(6.0));
/// assert_eq!(summary.average_waiting, Some(3.0));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricsCollector {
    completed: Vec<Process>,
}

/// Aggregates over the completed set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsSummary {
    pub completed: usize,
    pub average_turnaround: Option<f64>,
    pub average_waiting: Option<f64>,
    pub max_waiting: Option<usize>,

    /// Completions per tick over the elapsed run
    pub throughput: f64,
}

impl MetricsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Retire a completed process
    ///
    /// # Panics
    /// Panics if the process has no completion stamp
    pub fn record(&mut self, process: Process) {
        assert!(
            process.is_complete(),
            "process {} recorded before completion",
            process.id()
        );
        self.completed.push(process);
    }

    /// Completed processes, in completion order
    pub fn completed(&self) -> &[Process] {
        &self.completed
    }

    pub fn get(&self, id: ProcessId) -> Option<&Process> {
        self.completed.iter().find(|p| p.id() == id)
    }

    pub fn len(&self) -> usize {
        self.completed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.completed.is_empty()
    }

    pub fn clear(&mut self) {
        self.completed.clear();
    }

    /// Aggregate metrics after `elapsed_ticks` of simulated time
    pub fn summary(&self, elapsed_ticks: usize) -> MetricsSummary {
        let turnarounds: Vec<usize> = self
            .completed
            .iter()
            .filter_map(Process::turnaround_time)
            .collect();
        let waits: Vec<usize> = self
            .completed
            .iter()
            .filter_map(Process::waiting_time)
            .collect();

        MetricsSummary {
            completed: self.completed.len(),
            average_turnaround: mean(&turnarounds),
            average_waiting: mean(&waits),
            max_waiting: waits.iter().copied().max(),
            throughput: if elapsed_ticks == 0 {
                0.0
            } else {
                self.completed.len() as f64 / elapsed_ticks as f64
            },
        }
    }
}

fn mean(values: &[usize]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<usize>() as f64 / values.len() as f64)
    }
}
