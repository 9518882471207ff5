//! Time quantum of a level
//!
//! Serialized as a positive integer, or `null` for an unbounded quantum
//! (the "∞" of the deepest level).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum consecutive ticks a level grants one dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<usize>", into = "Option<usize>")]
pub enum Quantum {
    /// Preempt after this many ticks
    Finite(usize),

    /// Never preempt for time
    Unbounded,
}

impl Quantum {
    /// Whether a dispatch that has run `ticks` ticks must be preempted
    ///
    /// # Example
    /// ```
    /// use mlfq_simulator_core_rs::Quantum;
    ///
    /// assert!(!Quantum::Finite(3).is_expired(2));
    /// assert!(Quantum::Finite(3).is_expired(3));
    /// assert!(!Quantum::Unbounded.is_expired(1_000_000));
    /// ```
    pub fn is_expired(self, ticks: usize) -> bool {
        match self {
            Quantum::Finite(limit) => ticks >= limit,
            Quantum::Unbounded => false,
        }
    }

    pub fn is_unbounded(self) -> bool {
        matches!(self, Quantum::Unbounded)
    }

    /// Tick count, `None` when unbounded
    pub fn ticks(self) -> Option<usize> {
        match self {
            Quantum::Finite(limit) => Some(limit),
            Quantum::Unbounded => None,
        }
    }
}

impl From<Option<usize>> for Quantum {
    fn from(value: Option<usize>) -> Self {
        value.map_or(Quantum::Unbounded, Quantum::Finite)
    }
}

impl From<Quantum> for Option<usize> {
    fn from(quantum: Quantum) -> Self {
        quantum.ticks()
    }
}

impl fmt::Display for Quantum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantum::Finite(limit) => write!(f, "{}", limit),
            Quantum::Unbounded => write!(f, "∞"),
        }
    }
}

impl PartialOrd for Quantum {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// `Unbounded` orders after every finite quantum
impl Ord for Quantum {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        use std::cmp::Ordering;
        match (self, other) {
            (Quantum::Finite(a), Quantum::Finite(b)) => a.cmp(b),
            (Quantum::Finite(_), Quantum::Unbounded) => Ordering::Less,
            (Quantum::Unbounded, Quantum::Finite(_)) => Ordering::Greater,
            (Quantum::Unbounded, Quantum::Unbounded) => Ordering::Equal,
        }
    }
}
