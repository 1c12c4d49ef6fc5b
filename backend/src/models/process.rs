//! Process model
//!
//! Represents one simulated process competing for the CPU.
//! Each process has:
//! - A caller-supplied identifier (not required to be unique)
//! - A priority level (index into the scheduler's queue array)
//! - Original burst time and remaining time
//! - Accumulated wait time
//!
//! Once enqueued, a process is owned exclusively by the scheduler. All
//! mutation happens inside the crate so the record invariants hold:
//! `remaining_time <= burst_time`, `wait_time` never decreases, and a
//! finished process is never re-enqueued.

use serde::Serialize;
use thiserror::Error;

/// Errors that can occur when constructing a process
#[derive(Debug, Error, PartialEq)]
pub enum ProcessError {
    #[error("Process {pid} has negative burst time {burst_time}")]
    NegativeBurstTime { pid: i64, burst_time: i64 },
}

/// A process record owned by the scheduler
///
/// # Example
/// ```
/// use mlfq_simulator_core_rs::Process;
///
/// let process = Process::new(1, 0, 4).unwrap();
/// assert_eq!(process.remaining_time(), 4);
/// assert_eq!(process.wait_time(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Process {
    /// Caller-supplied identifier
    id: i64,

    /// Current queue index (0 = highest priority)
    priority: usize,

    /// Total CPU time the process needs
    burst_time: u64,

    /// CPU time still needed
    remaining_time: u64,

    /// Accumulated wait charge
    wait_time: u64,

    /// Global elapsed time at which the final slice ended
    completion_time: Option<u64>,
}

impl Process {
    /// Create a new process
    ///
    /// # Arguments
    /// * `id` - Caller-supplied identifier
    /// * `priority` - Initial queue index
    /// * `burst_time` - Total CPU need (must be non-negative)
    ///
    /// # Errors
    /// Returns `ProcessError::NegativeBurstTime` if `burst_time < 0`
    pub fn new(id: i64, priority: usize, burst_time: i64) -> Result<Self, ProcessError> {
        let burst_time = u64::try_from(burst_time)
            .map_err(|_| ProcessError::NegativeBurstTime { pid: id, burst_time })?;

        Ok(Self {
            id,
            priority,
            burst_time,
            remaining_time: burst_time,
            wait_time: 0,
            completion_time: None,
        })
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn priority(&self) -> usize {
        self.priority
    }

    pub fn burst_time(&self) -> u64 {
        self.burst_time
    }

    pub fn remaining_time(&self) -> u64 {
        self.remaining_time
    }

    pub fn wait_time(&self) -> u64 {
        self.wait_time
    }

    /// Global elapsed time when the process finished, if it has
    pub fn completion_time(&self) -> Option<u64> {
        self.completion_time
    }

    /// Check if the process has no CPU time left
    pub fn is_finished(&self) -> bool {
        self.remaining_time == 0
    }

    /// Run the process for at most `quantum` units
    ///
    /// Returns the number of units actually consumed.
    pub(crate) fn run_slice(&mut self, quantum: u64) -> u64 {
        let ran_for = self.remaining_time.min(quantum);
        self.remaining_time -= ran_for;
        ran_for
    }

    /// Saturates at `u64::MAX`
    pub(crate) fn charge_wait(&mut self, units: u64) {
        self.wait_time = self.wait_time.saturating_add(units);
    }

    pub(crate) fn set_priority(&mut self, priority: usize) {
        self.priority = priority;
    }

    pub(crate) fn mark_completed(&mut self, time: u64) {
        debug_assert!(self.is_finished());
        self.completion_time = Some(time);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_slice_preempts_at_quantum() {
        let mut process = Process::new(1, 0, 5).unwrap();
        assert_eq!(process.run_slice(2), 2);
        assert_eq!(process.remaining_time(), 3);
        assert!(!process.is_finished());
    }

    #[test]
    fn test_run_slice_finishes_short_remainder() {
        let mut process = Process::new(1, 0, 3).unwrap();
        assert_eq!(process.run_slice(5), 3);
        assert!(process.is_finished());
    }

    #[test]
    fn test_zero_burst_is_finished_immediately() {
        let mut process = Process::new(7, 0, 0).unwrap();
        assert!(process.is_finished());
        assert_eq!(process.run_slice(2), 0);
    }

    #[test]
    fn test_charge_wait_accumulates() {
        let mut process = Process::new(1, 0, 4).unwrap();
        process.charge_wait(2);
        process.charge_wait(6);
        assert_eq!(process.wait_time(), 8);
    }

    #[test]
    fn test_charge_wait_saturates() {
        let mut process = Process::new(1, 0, 4).unwrap();
        process.charge_wait(u64::MAX - 1);
        process.charge_wait(5);
        assert_eq!(process.wait_time(), u64::MAX);
    }
}
