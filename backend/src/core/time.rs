//! Simulated time
//!
//! The scheduler advances in discrete ticks. The clock only moves forward;
//! it is reset exclusively by rebuilding the scheduler state.

use serde::{Deserialize, Serialize};

/// Monotonic tick counter driving the scheduler
///
/// # Example
/// ```
/// use mlfq_simulator_core_rs::SimClock;
///
/// let mut clock = SimClock::new();
/// assert_eq!(clock.now(), 0);
///
/// clock.advance();
/// assert_eq!(clock.now(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimClock {
    /// Ticks elapsed since the simulation started
    current_tick: usize,
}

impl SimClock {
    /// Create a clock positioned at tick 0
    pub fn new() -> Self {
        Self { current_tick: 0 }
    }

    /// Advance time by one tick
    ///
    /// # Example
    /// ```
    /// use mlfq_simulator_core_rs::SimClock;
    ///
    /// let mut clock = SimClock::new();
    /// clock.advance();
    /// clock.advance();
    /// assert_eq!(clock.now(), 2);
    /// ```
    pub fn advance(&mut self) {
        self.current_tick += 1;
    }

    /// Current tick
    pub fn now(&self) -> usize {
        self.current_tick
    }
}
