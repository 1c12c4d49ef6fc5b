//! Run summary
//!
//! Flattened, serializable view of a finished run for callers that render
//! results (CLI output, Python bindings).

use serde::Serialize;

use crate::models::process::Process;

/// Results of one finished process
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessSummary {
    pub pid: i64,
    /// Priority after any aging
    pub final_priority: usize,
    pub burst_time: u64,
    pub wait_time: u64,
    pub completion_time: Option<u64>,
}

impl From<&Process> for ProcessSummary {
    fn from(process: &Process) -> Self {
        Self {
            pid: process.id(),
            final_priority: process.priority(),
            burst_time: process.burst_time(),
            wait_time: process.wait_time(),
            completion_time: process.completion_time(),
        }
    }
}

/// Totals plus per-process results, in completion order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub total_time: u64,
    pub processes: Vec<ProcessSummary>,
    /// Mean of the accumulated wait charges (0.0 with no processes)
    pub average_wait_time: f64,
}

impl RunSummary {
    pub fn new(total_time: u64, completed: &[Process]) -> Self {
        let processes: Vec<ProcessSummary> = completed.iter().map(ProcessSummary::from).collect();

        let average_wait_time = if processes.is_empty() {
            0.0
        } else {
            let total_wait: f64 = processes.iter().map(|p| p.wait_time as f64).sum();
            total_wait / processes.len() as f64
        };

        Self {
            total_time,
            processes,
            average_wait_time,
        }
    }
}
