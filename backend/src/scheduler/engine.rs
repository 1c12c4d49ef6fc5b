//! Scheduler Engine
//!
//! Multilevel feedback queue simulation loop:
//!
//! ```text
//! While any queue holds a process:
//!   For each queue index i in 0..N:
//!     1. Pop the head process of queue i (skip if empty)
//!     2. Run it for min(remaining, quantum), advancing the global clock
//!     3. Charge the process the *current global clock* as wait time
//!     4. If clock % age_threshold == 0, apply the aging rule to it
//!     5. If unfinished, append it to the queue matching its priority
//! Return the global clock
//! ```
//!
//! # Known quirks
//!
//! Results depend on every one of these.
//!
//! - Step 3 adds the cumulative clock, not the time since the process last
//!   ran, so wait times grow much faster than conventional waiting time.
//! - Step 4 tests the global clock rather than a per-process timer. A boost
//!   can fire twice for one process within a single pass, or never fire.
//! - The aging rule increments the priority *number*. Because queue 0 is the
//!   highest priority, an aged process moves toward the lowest-priority
//!   queue.
//! - Because the pass walks indices upward, a process aged into queue i+1 is
//!   picked up again later in the same pass.
//!
//! # Example
//!
//! ```rust
//! use mlfq_simulator_core_rs::{Process, Scheduler};
//!
//! let mut scheduler = Scheduler::new(3);
//! scheduler.enqueue_process(Process::new(1, 0, 4).unwrap()).unwrap();
//! scheduler.enqueue_process(Process::new(2, 1, 3).unwrap()).unwrap();
//!
//! assert_eq!(scheduler.run(), 7);
//! ```

use thiserror::Error;
use tracing::{debug, info, trace};

use super::config::{validate_age_threshold, validate_time_quantum, SchedulerConfig};
use super::summary::RunSummary;
use crate::core::time::TimeManager;
use crate::models::event::{Event, EventLog};
use crate::models::process::{Process, ProcessError};
use crate::models::queues::PriorityQueues;

const DEFAULT_QUANTUM: u64 = super::config::DEFAULT_TIME_QUANTUM as u64;
const DEFAULT_THRESHOLD: u64 = super::config::DEFAULT_AGE_THRESHOLD as u64;

/// Errors raised by caller-supplied input
#[derive(Debug, Error, PartialEq)]
pub enum SchedulerError {
    /// Process priority does not index a queue
    #[error("Process {pid} has priority {priority}, outside queue range 0..{num_queues}")]
    PriorityOutOfRange {
        pid: i64,
        priority: i64,
        num_queues: usize,
    },

    /// Configuration validation error
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Process record could not be built
    #[error("Invalid process: {0}")]
    InvalidProcess(#[from] ProcessError),

    /// Process already ran to completion
    #[error("Process {pid} already completed and cannot be enqueued again")]
    AlreadyCompleted { pid: i64 },

    /// Total queued CPU time would not fit the elapsed-time counter
    #[error("Process {pid} with burst {burst_time} pushes queued work past u64::MAX")]
    WorkloadOverflow { pid: i64, burst_time: u64 },
}

/// Multilevel feedback queue scheduler
///
/// Owns its queues, its clock, and every process handed to it. Instances are
/// fully independent of one another.
#[derive(Debug, Clone)]
pub struct Scheduler {
    /// One FIFO per priority level
    queues: PriorityQueues,

    /// Maximum CPU units per slice
    time_quantum: u64,

    /// Aging period of the global clock
    age_threshold: u64,

    /// Global elapsed-time counter
    clock: TimeManager,

    /// Remaining CPU time across all queued processes
    queued_work: u64,

    /// Finished processes in completion order
    completed: Vec<Process>,

    /// Complete scheduling history
    event_log: EventLog,
}

impl Scheduler {
    /// Create a scheduler with `num_queues` levels and default tunables
    /// (quantum 2, age threshold 5)
    ///
    /// # Panics
    /// Panics if `num_queues` is 0
    pub fn new(num_queues: usize) -> Self {
        assert!(num_queues > 0, "num_queues must be positive");
        Self::build(num_queues, DEFAULT_QUANTUM, DEFAULT_THRESHOLD)
    }

    /// Create a scheduler from a validated configuration
    ///
    /// # Example
    ///
    /// ```rust
    /// use mlfq_simulator_core_rs::{Scheduler, SchedulerConfig};
    ///
    /// let config = SchedulerConfig {
    ///     num_queues: 2,
    ///     time_quantum: 4,
    ///     age_threshold: 10,
    /// };
    ///
    /// let scheduler = Scheduler::from_config(&config).unwrap();
    /// assert_eq!(scheduler.time_quantum(), 4);
    /// ```
    pub fn from_config(config: &SchedulerConfig) -> Result<Self, SchedulerError> {
        config.validate()?;

        Ok(Self::build(
            config.num_queues,
            validate_time_quantum(config.time_quantum)?,
            validate_age_threshold(config.age_threshold)?,
        ))
    }

    fn build(num_queues: usize, time_quantum: u64, age_threshold: u64) -> Self {
        Self {
            queues: PriorityQueues::new(num_queues),
            time_quantum,
            age_threshold,
            clock: TimeManager::new(),
            queued_work: 0,
            completed: Vec::new(),
            event_log: EventLog::new(),
        }
    }

    /// Override the time quantum
    ///
    /// # Errors
    /// `SchedulerError::InvalidConfig` if `time_quantum <= 0`; the current
    /// value is kept.
    pub fn set_time_quantum(&mut self, time_quantum: i64) -> Result<(), SchedulerError> {
        self.time_quantum = validate_time_quantum(time_quantum)?;
        Ok(())
    }

    /// Override the aging threshold
    pub fn set_age_threshold(&mut self, age_threshold: i64) -> Result<(), SchedulerError> {
        self.age_threshold = validate_age_threshold(age_threshold)?;
        Ok(())
    }

    /// Builder form of [`Scheduler::set_time_quantum`]
    pub fn with_time_quantum(mut self, time_quantum: i64) -> Result<Self, SchedulerError> {
        self.set_time_quantum(time_quantum)?;
        Ok(self)
    }

    /// Builder form of [`Scheduler::set_age_threshold`]
    pub fn with_age_threshold(mut self, age_threshold: i64) -> Result<Self, SchedulerError> {
        self.set_age_threshold(age_threshold)?;
        Ok(self)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn num_queues(&self) -> usize {
        self.queues.num_levels()
    }

    pub fn time_quantum(&self) -> u64 {
        self.time_quantum
    }

    pub fn age_threshold(&self) -> u64 {
        self.age_threshold
    }

    /// Global clock value (total of the most recent run once it returns)
    pub fn time_elapsed(&self) -> u64 {
        self.clock.elapsed()
    }

    /// Number of processes waiting in queue `level`
    pub fn queue_len(&self, level: usize) -> usize {
        self.queues.len(level)
    }

    /// Number of processes waiting across all queues
    pub fn pending_count(&self) -> usize {
        self.queues.total_len()
    }

    /// Processes waiting in queue `level`, head first
    pub fn queued(&self, level: usize) -> impl Iterator<Item = &Process> {
        self.queues.iter_level(level)
    }

    /// Finished processes in completion order
    pub fn completed(&self) -> &[Process] {
        &self.completed
    }

    pub fn event_log(&self) -> &EventLog {
        &self.event_log
    }

    /// Per-process results of everything completed so far
    pub fn summary(&self) -> RunSummary {
        RunSummary::new(self.clock.elapsed(), &self.completed)
    }

    // ========================================================================
    // Enqueue
    // ========================================================================

    /// Append a process to the tail of the queue matching its priority
    ///
    /// # Errors
    /// The process is dropped and no queue is touched when:
    /// - `priority >= num_queues` (`SchedulerError::PriorityOutOfRange`)
    /// - it already finished a run (`SchedulerError::AlreadyCompleted`)
    /// - the summed remaining time of everything queued would exceed
    ///   `u64::MAX` (`SchedulerError::WorkloadOverflow`)
    pub fn enqueue_process(&mut self, process: Process) -> Result<(), SchedulerError> {
        let priority = process.priority();
        if priority >= self.num_queues() {
            return Err(SchedulerError::PriorityOutOfRange {
                pid: process.id(),
                priority: i64::try_from(priority).unwrap_or(i64::MAX),
                num_queues: self.num_queues(),
            });
        }

        if process.completion_time().is_some() {
            return Err(SchedulerError::AlreadyCompleted { pid: process.id() });
        }

        // A run starts its clock at 0 and advances it by exactly the queued
        // work, so this bound keeps the clock from overflowing.
        self.queued_work = self
            .queued_work
            .checked_add(process.remaining_time())
            .ok_or(SchedulerError::WorkloadOverflow {
                pid: process.id(),
                burst_time: process.burst_time(),
            })?;

        trace!(pid = process.id(), queue = priority, "enqueue");
        self.event_log.log(Event::Enqueued {
            time: self.clock.elapsed(),
            pid: process.id(),
            queue: priority,
        });
        self.queues.push_back(priority, process);
        Ok(())
    }

    /// Build a process from raw caller integers and enqueue it
    ///
    /// Negative priorities are rejected as out of range, negative burst times
    /// as invalid processes.
    ///
    /// # Example
    ///
    /// ```rust
    /// use mlfq_simulator_core_rs::{Scheduler, SchedulerError};
    ///
    /// let mut scheduler = Scheduler::new(2);
    /// assert!(scheduler.submit(1, 1, 3).is_ok());
    /// assert!(matches!(
    ///     scheduler.submit(2, -1, 3),
    ///     Err(SchedulerError::PriorityOutOfRange { .. })
    /// ));
    /// ```
    pub fn submit(&mut self, pid: i64, priority: i64, burst_time: i64) -> Result<(), SchedulerError> {
        let level = usize::try_from(priority).map_err(|_| SchedulerError::PriorityOutOfRange {
            pid,
            priority,
            num_queues: self.num_queues(),
        })?;

        let process = Process::new(pid, level, burst_time)?;
        self.enqueue_process(process)
    }

    // ========================================================================
    // Simulation
    // ========================================================================

    /// Run until every queue is empty and return the total elapsed time
    ///
    /// With nothing queued this returns 0 and leaves all state untouched.
    /// Otherwise the clock restarts at 0 for this run.
    pub fn run(&mut self) -> u64 {
        if self.queues.is_empty() {
            return 0;
        }

        self.clock.reset();
        let _span = tracing::debug_span!(
            "run",
            num_queues = self.num_queues(),
            time_quantum = self.time_quantum,
            age_threshold = self.age_threshold
        )
        .entered();

        while !self.queues.is_empty() {
            for level in 0..self.queues.num_levels() {
                if let Some(process) = self.queues.pop_front(level) {
                    self.execute_slice(level, process);
                }
            }
        }

        let total = self.clock.elapsed();
        info!(total_time = total, "Total time elapsed: {}", total);
        total
    }

    /// Aging rule: move one level toward the last queue, capped there
    pub fn boost_priority(&self, process: &mut Process) {
        let ceiling = self.num_queues() - 1;
        process.set_priority((process.priority() + 1).min(ceiling));
    }

    fn execute_slice(&mut self, level: usize, mut process: Process) {
        let pid = process.id();
        debug!(pid, queue = level, "Running process {} from queue {}", pid, level);

        let ran_for = process.run_slice(self.time_quantum);
        self.queued_work -= ran_for;
        self.clock.advance(ran_for);
        let now = self.clock.elapsed();

        // Cumulative charge: the whole clock, not the time since last run
        process.charge_wait(now);

        self.event_log.log(Event::Executed {
            time: now,
            pid,
            queue: level,
            ran_for,
            remaining: process.remaining_time(),
            wait_time: process.wait_time(),
        });

        if self.clock.is_multiple_of(self.age_threshold) {
            let old_priority = process.priority();
            self.boost_priority(&mut process);
            let new_priority = process.priority();

            debug!(pid, old_priority, new_priority, time = now, "aging fired");
            self.event_log.log(Event::Aged {
                time: now,
                pid,
                old_priority,
                new_priority,
            });
        }

        if process.is_finished() {
            process.mark_completed(now);
            debug!(pid, wait_time = process.wait_time(), time = now, "process completed");
            self.event_log.log(Event::Completed {
                time: now,
                pid,
                wait_time: process.wait_time(),
            });
            self.completed.push(process);
        } else {
            let queue = process.priority();
            self.event_log.log(Event::Requeued { time: now, pid, queue });
            self.queues.push_back(queue, process);
        }
    }
}
