//! Scripted random source
//!
//! Replays a fixed list of draws so a test can decide exactly on which ticks
//! a process arrives and how long it runs.

use super::RandomSource;
use std::collections::VecDeque;

/// Random source returning pre-recorded values
///
/// Once the uniform script runs dry, `next_f64` returns a value just below 1.0
/// so no Bernoulli trial with probability < 1 succeeds. Once the integer
/// script runs dry, `range_inclusive` returns `min`. A scripted integer outside
/// the requested range is a broken script and panics.
///
/// # Example
/// ```
/// use mlfq_simulator_core_rs::rng::{RandomSource, SequenceRandom};
///
/// // Admit on ticks 0 and 3 with bursts 5 and 12
/// let mut rng = SequenceRandom::admit_at(&[0, 3], &[5, 12]);
/// assert!(rng.next_f64() < 0.1);
/// assert_eq!(rng.range_inclusive(5, 50), 5);
/// assert!(rng.next_f64() >= 0.1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SequenceRandom {
    uniforms: VecDeque<f64>,
    integers: VecDeque<usize>,
}

const NEVER: f64 = 1.0 - f64::EPSILON;

impl SequenceRandom {
    /// Script raw uniform and integer draws
    pub fn new(uniforms: Vec<f64>, integers: Vec<usize>) -> Self {
        Self {
            uniforms: uniforms.into(),
            integers: integers.into(),
        }
    }

    /// Script an arrival process: admit exactly on `ticks`, with `bursts`
    ///
    /// Assumes one uniform draw per tick, which holds while the generator is
    /// below its population cap. `ticks` must be strictly increasing.
    pub fn admit_at(ticks: &[usize], bursts: &[usize]) -> Self {
        assert_eq!(ticks.len(), bursts.len(), "one burst per admission tick");

        let mut uniforms = Vec::new();
        let mut next = 0;
        for &tick in ticks {
            assert!(tick >= next, "admission ticks must be strictly increasing");
            uniforms.extend(std::iter::repeat(NEVER).take(tick - next));
            uniforms.push(0.0);
            next = tick + 1;
        }

        Self::new(uniforms, bursts.to_vec())
    }

    /// Uniform draws not yet consumed
    pub fn remaining_uniforms(&self) -> usize {
        self.uniforms.len()
    }
}

impl RandomSource for SequenceRandom {
    fn next_f64(&mut self) -> f64 {
        self.uniforms.pop_front().unwrap_or(NEVER)
    }

    /// # Panics
    /// Panics if the next scripted value lies outside `[min, max]`
    fn range_inclusive(&mut self, min: usize, max: usize) -> usize {
        let Some(value) = self.integers.pop_front() else {
            return min;
        };
        assert!(
            (min..=max).contains(&value),
            "scripted burst {} outside [{}, {}]",
            value,
            min,
            max
        );
        value
    }
}
