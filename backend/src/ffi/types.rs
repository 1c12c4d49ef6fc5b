//! Type conversion utilities for FFI boundary
//!
//! Converts between Rust types and PyO3-compatible types (PyDict, PyList).

use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use crate::scheduler::{RunSummary, SchedulerError};

/// Map a core error to a Python ValueError
pub fn scheduler_error_to_py(err: SchedulerError) -> PyErr {
    PyErr::new::<pyo3::exceptions::PyValueError, _>(err.to_string())
}

/// Convert RunSummary to Python dict
pub fn summary_to_py(py: Python, summary: &RunSummary) -> PyResult<Py<PyDict>> {
    let dict = PyDict::new(py);

    dict.set_item("total_time", summary.total_time)?;
    dict.set_item("average_wait_time", summary.average_wait_time)?;

    let processes = PyList::empty(py);
    for process in &summary.processes {
        let entry = PyDict::new(py);
        entry.set_item("pid", process.pid)?;
        entry.set_item("final_priority", process.final_priority)?;
        entry.set_item("burst_time", process.burst_time)?;
        entry.set_item("wait_time", process.wait_time)?;
        entry.set_item("completion_time", process.completion_time)?;
        processes.append(entry)?;
    }
    dict.set_item("processes", processes)?;

    Ok(dict.unbind())
}
