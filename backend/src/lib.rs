//! MLFQ Simulator Core - Rust Engine
//!
//! Deterministic multilevel feedback queue scheduling simulator.
//!
//! # Architecture
//!
//! - **core**: Global simulation clock
//! - **models**: Domain types (Process, PriorityQueues, Event)
//! - **scheduler**: Configuration, simulation loop, and run summaries
//!
//! # Critical Invariants
//!
//! 1. `0 <= remaining_time <= burst_time` for every process
//! 2. A process sits in at most one queue, and never after it finishes
//! 3. Priorities always index a valid queue
//! 4. Runs are single-threaded and fully deterministic

// Module declarations
pub mod core;
pub mod models;
pub mod scheduler;

// Re-exports for convenience
pub use crate::core::time::TimeManager;
pub use models::{
    event::{Event, EventLog},
    process::{Process, ProcessError},
    queues::PriorityQueues,
};
pub use scheduler::{ProcessSummary, RunSummary, Scheduler, SchedulerConfig, SchedulerError};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn mlfq_simulator_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::scheduler::PyScheduler>()?;
    Ok(())
}
