//! Scheduler Engine
//!
//! The tick-driven state machine of the multilevel feedback queue:
//! - Process arrivals (Bernoulli admission under a population cap)
//! - Execution of the running process and quantum preemption
//! - Demotion of preempted processes (never promotion)
//! - Dispatch from the shallowest non-empty level
//! - Event logging (complete simulation history)
//!
//! # Architecture
//!
//! ```text
//! For each tick t (skipped entirely while paused):
//! 1. Admit an arrival into the tail of level 0
//! 2. Run the dispatched process for one tick
//!    - finished        → stamp timings, retire to metrics
//!    - quantum expired → demote (unless deepest), re-queue at tail
//! 3. If the CPU is free, dispatch from the shallowest non-empty level
//! 4. Advance time (also while idle)
//! ```
//!
//! Shallow levels have strict priority: every free CPU moment re-scans from
//! level 0. There is no aging, so under sustained arrivals a long job parked
//! in a deep level can starve.
//!
//! # Example
//!
//! ```rust
//! use mlfq_simulator_core_rs::scheduler::{Scheduler, SchedulerConfig};
//! use mlfq_simulator_core_rs::Quantum;
//!
//! let config = SchedulerConfig::uniform(
//!     vec![Quantum::Finite(2), Quantum::Finite(4), Quantum::Unbounded],
//!     5,
//! )
//! .with_seed(12345);
//!
//! let mut scheduler = Scheduler::from_config(&config).unwrap();
//! scheduler.run(10_000);
//!
//! assert!(scheduler.is_finished());
//! assert_eq!(scheduler.completed().len(), 5);
//! ```

use crate::arrivals::{ArrivalConfig, ArrivalGenerator};
use crate::core::time::SimClock;
use crate::metrics::MetricsCollector;
use crate::models::{Event, EventLog, Process, ProcessId, QueueBank};
use crate::policy::LevelPolicy;
use crate::rng::{RandomSource, RngManager};
use crate::scheduler::config::{ConfigError, SchedulerConfig};
use crate::scheduler::snapshot::SchedulerSnapshot;
use serde::{Deserialize, Serialize};
use std::collections::{HashSet, VecDeque};
use thiserror::Error;
use tracing::{debug, trace};

/// Violations of the scheduler's bookkeeping invariants
///
/// These indicate a programming defect, never bad input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SimulationError {
    #[error("process {pid} is tracked more than once")]
    DuplicateProcess { pid: ProcessId },

    #[error("process {pid} waits at level {queue_level} but records level {recorded_level}")]
    LevelMismatch {
        pid: ProcessId,
        queue_level: usize,
        recorded_level: usize,
    },

    #[error("process {pid} has level {level}, deepest level is {deepest}")]
    LevelOutOfRange {
        pid: ProcessId,
        level: usize,
        deepest: usize,
    },

    #[error("process {pid} is complete but still scheduled")]
    CompletedButScheduled { pid: ProcessId },

    #[error("process {pid} was retired without completion timings")]
    MissingCompletion { pid: ProcessId },

    #[error("{tracked} processes tracked but {generated} generated")]
    PopulationMismatch { tracked: usize, generated: usize },

    #[error("{generated} processes generated, cap is {cap}")]
    CapExceeded { generated: usize, cap: usize },
}

/// Result of a single tick
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickResult {
    /// Tick that was executed (or skipped, when paused)
    pub tick: usize,

    /// True if the scheduler was paused and nothing happened
    pub paused: bool,

    /// Process admitted this tick
    pub arrived: Option<ProcessId>,

    /// Process that ran its last tick
    pub completed: Option<ProcessId>,

    /// Process whose quantum expired
    pub preempted: Option<ProcessId>,

    /// Process newly placed on the CPU
    pub dispatched: Option<ProcessId>,

    /// Process holding the CPU at the end of the tick
    pub running: Option<ProcessId>,
}

/// Multilevel feedback queue scheduler
///
/// Owns every piece of mutable simulation state. The only mutating
/// operations are [`tick`](Self::tick), [`set_paused`](Self::set_paused) and
/// [`reset`](Self::reset); everything else is a read-only view.
#[derive(Debug)]
pub struct Scheduler {
    /// Policy of each level, shallowest first
    level_policies: Vec<LevelPolicy>,

    /// Waiting processes per level
    queues: QueueBank,

    clock: SimClock,

    arrivals: ArrivalGenerator,

    /// Source of every random draw
    rng: Box<dyn RandomSource>,

    /// Seed the RNG is rebuilt from on reset
    rng_seed: Option<u64>,

    /// Process holding the CPU
    running: Option<Process>,

    /// Ticks the running process has held the CPU since its dispatch
    ticks_in_current_dispatch: usize,

    is_paused: bool,

    metrics: MetricsCollector,

    event_log: EventLog,
}

impl Scheduler {
    /// Create a scheduler from level policies, arrival parameters and a
    /// random source
    ///
    /// Arguments are taken as given; use [`Scheduler::from_config`] for
    /// validated input. A population cap of zero is accepted and yields a
    /// system that idles forever.
    ///
    /// # Panics
    /// Panics if `level_policies` is empty
    pub fn new(
        level_policies: Vec<LevelPolicy>,
        arrivals: ArrivalConfig,
        rng: Box<dyn RandomSource>,
    ) -> Self {
        let queues = QueueBank::new(level_policies.len());

        Self {
            level_policies,
            queues,
            clock: SimClock::new(),
            arrivals: ArrivalGenerator::new(arrivals),
            rng,
            rng_seed: None,
            running: None,
            ticks_in_current_dispatch: 0,
            is_paused: false,
            metrics: MetricsCollector::new(),
            event_log: EventLog::new(),
        }
    }

    /// Create a scheduler driven by a seeded xorshift RNG
    pub fn with_seed(level_policies: Vec<LevelPolicy>, arrivals: ArrivalConfig, seed: u64) -> Self {
        let mut scheduler = Self::new(level_policies, arrivals, Box::new(RngManager::new(seed)));
        scheduler.rng_seed = Some(seed);
        scheduler
    }

    /// Validate `config` and build a scheduler from it
    ///
    /// Unseeded configurations draw a fresh seed from `rand`.
    pub fn from_config(config: &SchedulerConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let levels = config.level_policies();
        let arrivals = config.arrival_config();
        let scheduler = match config.rng_seed {
            Some(seed) => Self::with_seed(levels, arrivals, seed),
            None => Self::new(levels, arrivals, Box::new(RngManager::from_entropy())),
        };

        debug!(
            levels = scheduler.level_policies.len(),
            population_cap = config.population_cap,
            seed = ?config.rng_seed,
            "scheduler created"
        );

        Ok(scheduler)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn current_time(&self) -> usize {
        self.clock.now()
    }

    pub fn is_paused(&self) -> bool {
        self.is_paused
    }

    pub fn level_policies(&self) -> &[LevelPolicy] {
        &self.level_policies
    }

    pub fn num_levels(&self) -> usize {
        self.level_policies.len()
    }

    /// All level queues
    pub fn queues(&self) -> &QueueBank {
        &self.queues
    }

    /// Waiting processes at `level`, in queue order
    ///
    /// # Panics
    /// Panics if `level` is out of range
    pub fn level(&self, level: usize) -> &VecDeque<Process> {
        self.queues.level(level)
    }

    /// Process currently holding the CPU
    pub fn running(&self) -> Option<&Process> {
        self.running.as_ref()
    }

    pub fn ticks_in_current_dispatch(&self) -> usize {
        self.ticks_in_current_dispatch
    }

    pub fn metrics(&self) -> &MetricsCollector {
        &self.metrics
    }

    /// Completed processes, in completion order
    pub fn completed(&self) -> &[Process] {
        self.metrics.completed()
    }

    pub fn generated_count(&self) -> usize {
        self.arrivals.generated_count()
    }

    pub fn population_cap(&self) -> usize {
        self.arrivals.population_cap()
    }

    pub fn event_log(&self) -> &EventLog {
        &self.event_log
    }

    /// No process on the CPU
    pub fn is_idle(&self) -> bool {
        self.running.is_none()
    }

    /// Every process that will ever exist has completed
    pub fn is_finished(&self) -> bool {
        self.arrivals.is_exhausted() && self.running.is_none() && self.queues.is_empty()
    }

    /// Read-only view for a presentation layer
    pub fn snapshot(&self) -> SchedulerSnapshot {
        SchedulerSnapshot::capture(self)
    }

    // ========================================================================
    // Control
    // ========================================================================

    /// Gate [`tick`](Self::tick); takes effect on the next call
    pub fn set_paused(&mut self, paused: bool) {
        self.is_paused = paused;
    }

    /// Return to the initial state, keeping policies and arrival parameters
    ///
    /// A seeded scheduler replays the same arrivals after a reset; an
    /// unseeded one continues its random stream. The pause flag is kept.
    pub fn reset(&mut self) {
        let arrivals = self.arrivals.config().clone();

        self.queues.clear();
        self.clock = SimClock::new();
        self.arrivals = ArrivalGenerator::new(arrivals);
        if let Some(seed) = self.rng_seed {
            self.rng = Box::new(RngManager::new(seed));
        }
        self.running = None;
        self.ticks_in_current_dispatch = 0;
        self.metrics.clear();
        self.event_log.clear();

        debug!("scheduler reset");
    }

    /// Tick until every process has finished or `max_ticks` have run
    ///
    /// Returns the number of ticks executed; zero while paused.
    pub fn run(&mut self, max_ticks: usize) -> usize {
        if self.is_paused {
            return 0;
        }

        let mut executed = 0;
        while executed < max_ticks && !self.is_finished() {
            self.tick();
            executed += 1;
        }
        executed
    }

    // ========================================================================
    // Tick Loop Implementation
    // ========================================================================

    /// Execute one simulation tick
    ///
    /// A no-op while paused: neither state nor time changes. Otherwise the
    /// whole tick is applied before returning.
    pub fn tick(&mut self) -> TickResult {
        let now = self.clock.now();
        let mut result = TickResult {
            tick: now,
            ..TickResult::default()
        };

        if self.is_paused {
            result.paused = true;
            result.running = self.running.as_ref().map(Process::id);
            return result;
        }

        // STEP 1: ARRIVALS
        if let Some(process) = self.arrivals.maybe_admit(now, self.rng.as_mut()) {
            trace!(tick = now, pid = process.id(), burst = process.burst_time(), "arrival");
            self.event_log.log(Event::Arrival {
                tick: now,
                pid: process.id(),
                burst_time: process.burst_time(),
            });
            result.arrived = Some(process.id());
            self.queues.enqueue(process);
        }

        // STEP 2: EXECUTE
        if let Some(process) = self.running.take() {
            self.execute(process, now, &mut result);
        }

        // STEP 3: DISPATCH
        if self.running.is_none() {
            result.dispatched = self.dispatch(now);
        }
        result.running = self.running.as_ref().map(Process::id);

        // STEP 4: ADVANCE TIME
        self.clock.advance();

        debug_assert_eq!(self.check_invariants(), Ok(()));

        result
    }

    /// Run `process` for one tick, then retire, re-queue or keep it
    fn execute(&mut self, mut process: Process, now: usize, result: &mut TickResult) {
        process.run_one_tick();
        self.ticks_in_current_dispatch += 1;

        let pid = process.id();

        if process.remaining_time() == 0 {
            let stats = process.complete(now);
            debug!(
                tick = now,
                pid,
                turnaround = stats.turnaround_time,
                waiting = stats.waiting_time,
                "completion"
            );
            self.event_log.log(Event::Completion {
                tick: now,
                pid,
                turnaround_time: stats.turnaround_time,
                waiting_time: stats.waiting_time,
            });
            self.metrics.record(process);
            self.ticks_in_current_dispatch = 0;
            result.completed = Some(pid);
            return;
        }

        let from_level = process.current_level();
        let quantum = self.level_policies[from_level].quantum();
        if !quantum.is_expired(self.ticks_in_current_dispatch) {
            self.running = Some(process);
            return;
        }

        process.demote(self.queues.deepest_level());
        let to_level = process.current_level();
        debug!(tick = now, pid, from_level, to_level, "preemption");
        self.event_log.log(Event::Preemption {
            tick: now,
            pid,
            from_level,
            to_level,
            remaining_time: process.remaining_time(),
        });
        self.queues.enqueue(process);
        self.ticks_in_current_dispatch = 0;
        result.preempted = Some(pid);
    }

    /// Move a waiting process onto the CPU, scanning from the shallowest level
    fn dispatch(&mut self, now: usize) -> Option<ProcessId> {
        let level = self.queues.first_non_empty()?;
        let position = self.level_policies[level].select(self.queues.level(level))?;
        let process = self.queues.take(level, position)?;

        let pid = process.id();
        debug!(
            tick = now,
            pid,
            level,
            policy = self.level_policies[level].label(),
            waiting = self.queues.total_waiting(),
            "dispatch"
        );
        self.event_log.log(Event::Dispatch {
            tick: now,
            pid,
            level,
            remaining_time: process.remaining_time(),
        });

        self.running = Some(process);
        self.ticks_in_current_dispatch = 0;
        Some(pid)
    }

    // ========================================================================
    // Invariants
    // ========================================================================

    /// Verify process membership and bookkeeping
    ///
    /// Every generated process must be in exactly one of {a level queue, the
    /// running slot, the completed set}, at a level matching its queue.
    pub fn check_invariants(&self) -> Result<(), SimulationError> {
        let deepest = self.queues.deepest_level();
        let mut seen = HashSet::new();

        for (queue_level, queue) in self.queues.levels().iter().enumerate() {
            for process in queue {
                if process.current_level() != queue_level {
                    return Err(SimulationError::LevelMismatch {
                        pid: process.id(),
                        queue_level,
                        recorded_level: process.current_level(),
                    });
                }
            }
        }

        let scheduled = self.queues.iter().chain(self.running.iter());
        for process in scheduled {
            if process.current_level() > deepest {
                return Err(SimulationError::LevelOutOfRange {
                    pid: process.id(),
                    level: process.current_level(),
                    deepest,
                });
            }
            if process.is_complete() {
                return Err(SimulationError::CompletedButScheduled { pid: process.id() });
            }
            if !seen.insert(process.id()) {
                return Err(SimulationError::DuplicateProcess { pid: process.id() });
            }
        }

        for process in self.metrics.completed() {
            if !process.is_complete() {
                return Err(SimulationError::MissingCompletion { pid: process.id() });
            }
            if !seen.insert(process.id()) {
                return Err(SimulationError::DuplicateProcess { pid: process.id() });
            }
        }

        let generated = self.arrivals.generated_count();
        if seen.len() != generated {
            return Err(SimulationError::PopulationMismatch {
                tracked: seen.len(),
                generated,
            });
        }
        if generated > self.arrivals.population_cap() {
            return Err(SimulationError::CapExceeded {
                generated,
                cap: self.arrivals.population_cap(),
            });
        }

        Ok(())
    }
}
