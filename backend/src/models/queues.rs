//! Priority queue set
//!
//! One FIFO level per priority, index 0 = highest priority. Only head-pop
//! and tail-append are needed, so each level is a `VecDeque` and both
//! operations are O(1).

use std::collections::VecDeque;

use super::process::Process;

/// Fixed number of FIFO levels holding processes awaiting the CPU
///
/// Only the scheduler appends, after checking the priority is in range.
#[derive(Debug, Clone)]
pub struct PriorityQueues {
    levels: Vec<VecDeque<Process>>,
}

impl PriorityQueues {
    /// Create `num_levels` empty levels
    pub fn new(num_levels: usize) -> Self {
        Self {
            levels: (0..num_levels).map(|_| VecDeque::new()).collect(),
        }
    }

    pub fn num_levels(&self) -> usize {
        self.levels.len()
    }

    /// Append a process to the tail of `level`
    ///
    /// # Panics
    /// Panics if `level >= num_levels()`
    pub(crate) fn push_back(&mut self, level: usize, process: Process) {
        self.levels[level].push_back(process);
    }

    /// Remove the process at the head of `level`, if any
    pub fn pop_front(&mut self, level: usize) -> Option<Process> {
        self.levels.get_mut(level).and_then(VecDeque::pop_front)
    }

    /// Number of processes waiting in `level` (0 for out-of-range levels)
    pub fn len(&self, level: usize) -> usize {
        self.levels.get(level).map_or(0, VecDeque::len)
    }

    /// Number of processes waiting across all levels
    pub fn total_len(&self) -> usize {
        self.levels.iter().map(VecDeque::len).sum()
    }

    /// True when no level holds a process
    pub fn is_empty(&self) -> bool {
        self.levels.iter().all(VecDeque::is_empty)
    }

    /// Processes in `level`, head first
    pub fn iter_level(&self, level: usize) -> impl Iterator<Item = &Process> {
        self.levels.get(level).into_iter().flatten()
    }
}
