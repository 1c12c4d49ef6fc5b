//! Time management for the simulation
//!
//! The scheduler measures time in abstract CPU units. A single global
//! counter advances by the length of every slice that runs, and the aging
//! rule is evaluated against that counter.

use serde::{Deserialize, Serialize};

/// Owns the global elapsed-time counter of one scheduler instance
///
/// # Example
/// ```
/// use mlfq_simulator_core_rs::TimeManager;
///
/// let mut time = TimeManager::new();
/// assert_eq!(time.elapsed(), 0);
///
/// time.advance(2);
/// assert_eq!(time.elapsed(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeManager {
    /// Total time units consumed by executed slices
    elapsed: u64,
}

impl TimeManager {
    /// Create a new TimeManager at time 0
    pub fn new() -> Self {
        Self { elapsed: 0 }
    }

    /// Advance time by the length of one slice
    ///
    /// A zero-length slice leaves the counter unchanged. The counter
    /// saturates at `u64::MAX`; the scheduler bounds queued work so a run
    /// never reaches it.
    ///
    /// # Example
    /// ```
    /// use mlfq_simulator_core_rs::TimeManager;
    ///
    /// let mut time = TimeManager::new();
    /// time.advance(3);
    /// time.advance(0);
    /// assert_eq!(time.elapsed(), 3);
    /// ```
    pub fn advance(&mut self, units: u64) {
        self.elapsed = self.elapsed.saturating_add(units);
    }

    /// Get total elapsed time
    pub fn elapsed(&self) -> u64 {
        self.elapsed
    }

    /// Rewind the counter to 0
    pub fn reset(&mut self) {
        self.elapsed = 0;
    }

    /// Check whether the counter sits exactly on a multiple of `threshold`
    ///
    /// Time 0 counts as a multiple of every threshold.
    ///
    /// # Panics
    /// Panics if `threshold` is 0
    ///
    /// # Example
    /// ```
    /// use mlfq_simulator_core_rs::TimeManager;
    ///
    /// let mut time = TimeManager::new();
    /// time.advance(10);
    /// assert!(time.is_multiple_of(5));
    /// assert!(!time.is_multiple_of(3));
    /// ```
    pub fn is_multiple_of(&self, threshold: u64) -> bool {
        assert!(threshold > 0, "threshold must be positive");
        self.elapsed % threshold == 0
    }
}
