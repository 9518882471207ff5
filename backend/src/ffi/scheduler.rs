//! PyO3 wrapper for Scheduler
//!
//! This module provides the Python interface to the Rust scheduler.

use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use super::types::{parse_scheduler_config, process_to_py, snapshot_to_py, tick_result_to_py};
use crate::scheduler::{ProcessSnapshot, Scheduler as RustScheduler};

/// Python wrapper for Rust Scheduler
///
/// # Example (from Python)
///
/// ```python
/// from mlfq_simulator_core_rs import Scheduler
///
/// sched = Scheduler.new({
///     "variant": "mixed",
///     "q0": 3,
///     "q1": 5,
///     "population_cap": 20,
///     "rng_seed": 42,
/// })
///
/// while not sched.is_finished():
///     result = sched.tick()
///     state = sched.snapshot()   # render queues, running process, table
/// ```
#[pyclass(name = "Scheduler", unsendable)]
pub struct PyScheduler {
    inner: RustScheduler,
}

#[pymethods]
impl PyScheduler {
    /// Create a new scheduler from configuration
    ///
    /// # Errors
    ///
    /// Raises ValueError if:
    /// - Required configuration fields are missing
    /// - Type conversions fail
    /// - The quanta or population cap break the entry rules
    #[staticmethod]
    fn new(config: &Bound<'_, PyDict>) -> PyResult<Self> {
        let rust_config = parse_scheduler_config(config)?;

        let inner = RustScheduler::from_config(&rust_config).map_err(|e| {
            PyErr::new::<pyo3::exceptions::PyValueError, _>(format!(
                "Invalid scheduler configuration: {}",
                e
            ))
        })?;

        Ok(PyScheduler { inner })
    }

    /// Execute one simulation tick
    ///
    /// # Returns
    ///
    /// Dictionary containing:
    /// - `tick`: Tick executed
    /// - `paused`: Whether the tick was skipped
    /// - `arrived`, `completed`, `preempted`, `dispatched`, `running`:
    ///   process ids or None
    fn tick(&mut self, py: Python<'_>) -> PyResult<Py<PyDict>> {
        let result = self.inner.tick();
        tick_result_to_py(py, &result)
    }

    /// Run until finished or `max_ticks`, returning ticks executed
    fn run(&mut self, max_ticks: usize) -> usize {
        self.inner.run(max_ticks)
    }

    fn set_paused(&mut self, paused: bool) {
        self.inner.set_paused(paused);
    }

    fn is_paused(&self) -> bool {
        self.inner.is_paused()
    }

    /// Restart the simulation with the same configuration
    fn reset(&mut self) {
        self.inner.reset();
    }

    fn current_time(&self) -> usize {
        self.inner.current_time()
    }

    fn is_finished(&self) -> bool {
        self.inner.is_finished()
    }

    fn generated_count(&self) -> usize {
        self.inner.generated_count()
    }

    fn population_cap(&self) -> usize {
        self.inner.population_cap()
    }

    /// Full state view: levels, running process, completed list, counters
    fn snapshot(&self, py: Python<'_>) -> PyResult<Py<PyDict>> {
        snapshot_to_py(py, &self.inner.snapshot())
    }

    /// Completed processes in completion order
    fn completed(&self, py: Python<'_>) -> PyResult<Py<PyList>> {
        let list = PyList::empty_bound(py);
        for process in self.inner.completed() {
            list.append(process_to_py(py, &ProcessSnapshot::from(process))?)?;
        }
        Ok(list.unbind())
    }

    /// Snapshot serialized as JSON
    fn snapshot_json(&self) -> PyResult<String> {
        self.inner.snapshot().to_json().map_err(|e| {
            PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(format!(
                "Snapshot serialization failed: {}",
                e
            ))
        })
    }
}
