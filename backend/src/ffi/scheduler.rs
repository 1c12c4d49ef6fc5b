//! PyO3 wrapper for Scheduler
//!
//! This module provides the Python interface to the Rust scheduler.

use pyo3::prelude::*;
use pyo3::types::PyDict;

use super::types::{scheduler_error_to_py, summary_to_py};
use crate::scheduler::{Scheduler as RustScheduler, SchedulerConfig};

/// Python wrapper for Rust Scheduler
///
/// # Example (from Python)
///
/// ```python
/// from mlfq_simulator_core_rs import Scheduler
///
/// sched = Scheduler(3, time_quantum=2)
/// sched.enqueue(1, 0, 4)
/// sched.enqueue(2, 1, 3)
/// print(f"Total time elapsed: {sched.run()}")
/// ```
#[pyclass(name = "Scheduler")]
pub struct PyScheduler {
    inner: RustScheduler,
}

#[pymethods]
impl PyScheduler {
    /// Create a new scheduler
    ///
    /// # Errors
    ///
    /// Raises ValueError if any argument is non-positive
    #[new]
    #[pyo3(signature = (num_queues, time_quantum=2, age_threshold=5))]
    fn new(num_queues: usize, time_quantum: i64, age_threshold: i64) -> PyResult<Self> {
        let config = SchedulerConfig {
            num_queues,
            time_quantum,
            age_threshold,
        };

        let inner = RustScheduler::from_config(&config).map_err(scheduler_error_to_py)?;
        Ok(PyScheduler { inner })
    }

    /// Enqueue one process
    ///
    /// # Errors
    ///
    /// Raises ValueError if the priority is out of range or the burst time
    /// is negative
    fn enqueue(&mut self, pid: i64, priority: i64, burst_time: i64) -> PyResult<()> {
        self.inner
            .submit(pid, priority, burst_time)
            .map_err(scheduler_error_to_py)
    }

    /// Run to completion and return total elapsed time
    fn run(&mut self) -> u64 {
        self.inner.run()
    }

    fn time_elapsed(&self) -> u64 {
        self.inner.time_elapsed()
    }

    fn pending_count(&self) -> usize {
        self.inner.pending_count()
    }

    /// Per-process results as a dict
    ///
    /// Keys: `total_time`, `average_wait_time`, `processes` (list of dicts
    /// with `pid`, `final_priority`, `burst_time`, `wait_time`,
    /// `completion_time`).
    fn summary(&self, py: Python) -> PyResult<Py<PyDict>> {
        summary_to_py(py, &self.inner.summary())
    }
}
