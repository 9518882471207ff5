//! Type conversion utilities for FFI boundary
//!
//! Converts between Rust types and PyO3-compatible types (PyDict, PyList).

use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use crate::scheduler::{
    ArrivalParams, ProcessSnapshot, SchedulerConfig, SchedulerSnapshot, SchedulerVariant,
    TickResult,
};
use crate::policy::Quantum;

// ========================================================================
// PyDict Extraction Helpers
// ========================================================================

/// Extract a required field from a Python dict with clear error messages.
fn extract_required<'py, T>(dict: &Bound<'py, PyDict>, key: &str) -> PyResult<T>
where
    T: FromPyObject<'py>,
{
    dict.get_item(key)?
        .ok_or_else(|| {
            PyErr::new::<pyo3::exceptions::PyValueError, _>(format!(
                "Missing required field '{}'",
                key
            ))
        })?
        .extract()
}

/// Extract a field with a default value if missing.
fn extract_with_default<'py, T>(dict: &Bound<'py, PyDict>, key: &str, default: T) -> PyResult<T>
where
    T: FromPyObject<'py>,
{
    match dict.get_item(key)? {
        Some(value) if !value.is_none() => value.extract(),
        _ => Ok(default),
    }
}

// ========================================================================
// Configuration Parsers
// ========================================================================

/// Convert Python dict to SchedulerConfig
///
/// Expected keys:
/// - `variant`: `"uniform"` (with `quanta`: list of int or None) or
///   `"mixed"` (with `q0`, `q1`)
/// - `population_cap`: int
/// - optional `rng_seed`, `admission_probability`, `burst_min`, `burst_max`
///
/// Rule checks happen in `SchedulerConfig::validate`.
pub fn parse_scheduler_config(py_config: &Bound<'_, PyDict>) -> PyResult<SchedulerConfig> {
    let variant_name: String = extract_required(py_config, "variant")?;

    let variant = match variant_name.to_lowercase().as_str() {
        "uniform" => {
            let quanta: Vec<Option<usize>> = extract_required(py_config, "quanta")?;
            SchedulerVariant::Uniform {
                quanta: quanta.into_iter().map(Quantum::from).collect(),
            }
        }
        "mixed" => SchedulerVariant::Mixed {
            q0: extract_required(py_config, "q0")?,
            q1: extract_required(py_config, "q1")?,
        },
        other => {
            return Err(PyErr::new::<pyo3::exceptions::PyValueError, _>(format!(
                "Unknown variant '{}', expected 'uniform' or 'mixed'",
                other
            )))
        }
    };

    let defaults = ArrivalParams::default();

    Ok(SchedulerConfig {
        variant,
        population_cap: extract_required(py_config, "population_cap")?,
        rng_seed: extract_with_default(py_config, "rng_seed", None)?,
        arrivals: ArrivalParams {
            admission_probability: extract_with_default(
                py_config,
                "admission_probability",
                defaults.admission_probability,
            )?,
            burst_min: extract_with_default(py_config, "burst_min", defaults.burst_min)?,
            burst_max: extract_with_default(py_config, "burst_max", defaults.burst_max)?,
        },
    })
}

// ========================================================================
// Result Converters
// ========================================================================

/// Convert TickResult to Python dict
pub fn tick_result_to_py(py: Python<'_>, result: &TickResult) -> PyResult<Py<PyDict>> {
    let dict = PyDict::new_bound(py);
    dict.set_item("tick", result.tick)?;
    dict.set_item("paused", result.paused)?;
    dict.set_item("arrived", result.arrived)?;
    dict.set_item("completed", result.completed)?;
    dict.set_item("preempted", result.preempted)?;
    dict.set_item("dispatched", result.dispatched)?;
    dict.set_item("running", result.running)?;
    Ok(dict.unbind())
}

/// Convert ProcessSnapshot to Python dict
pub fn process_to_py(py: Python<'_>, process: &ProcessSnapshot) -> PyResult<Py<PyDict>> {
    let dict = PyDict::new_bound(py);
    dict.set_item("pid", process.pid)?;
    dict.set_item("arrival_time", process.arrival_time)?;
    dict.set_item("burst_time", process.burst_time)?;
    dict.set_item("remaining_time", process.remaining_time)?;
    dict.set_item("current_level", process.current_level)?;
    dict.set_item("progress", process.progress)?;
    dict.set_item("completion_time", process.completion_time)?;
    dict.set_item("turnaround_time", process.turnaround_time)?;
    dict.set_item("waiting_time", process.waiting_time)?;
    Ok(dict.unbind())
}

/// Convert SchedulerSnapshot to Python dict
pub fn snapshot_to_py(py: Python<'_>, snapshot: &SchedulerSnapshot) -> PyResult<Py<PyDict>> {
    let dict = PyDict::new_bound(py);
    dict.set_item("current_time", snapshot.current_time)?;
    dict.set_item("is_paused", snapshot.is_paused)?;
    dict.set_item("ticks_in_current_dispatch", snapshot.ticks_in_current_dispatch)?;
    dict.set_item("generated_count", snapshot.generated_count)?;
    dict.set_item("population_cap", snapshot.population_cap)?;

    let levels = PyList::empty_bound(py);
    for level in &snapshot.levels {
        let level_dict = PyDict::new_bound(py);
        level_dict.set_item("index", level.index)?;
        level_dict.set_item("policy", &level.policy)?;
        level_dict.set_item("quantum", level.quantum.ticks())?;

        let processes = PyList::empty_bound(py);
        for process in &level.processes {
            processes.append(process_to_py(py, process)?)?;
        }
        level_dict.set_item("processes", processes)?;
        levels.append(level_dict)?;
    }
    dict.set_item("levels", levels)?;

    match &snapshot.running {
        Some(process) => dict.set_item("running", process_to_py(py, process)?)?,
        None => dict.set_item("running", py.None())?,
    }

    let completed = PyList::empty_bound(py);
    for process in &snapshot.completed {
        completed.append(process_to_py(py, process)?)?;
    }
    dict.set_item("completed", completed)?;

    Ok(dict.unbind())
}
