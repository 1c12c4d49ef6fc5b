//! Event logging for simulation replay and auditing.
//!
//! This module defines the Event enum which captures every scheduling state
//! change during a run. Events enable:
//! - Debugging (see exactly which process ran from which queue, and when)
//! - Auditing (verify the time and wait-charge arithmetic slice by slice)
//! - Analysis (extract per-process timelines)
//!
//! # Event Types
//!
//! - **Enqueued**: Process handed to the scheduler
//! - **Executed**: One slice ran on the CPU
//! - **Aged**: Aging rule fired for the process that just ran
//! - **Requeued**: Unfinished process went back to a queue tail
//! - **Completed**: Process finished and left the scheduler
//!
//! # Example
//!
//! ```rust
//! use mlfq_simulator_core_rs::models::Event;
//!
//! let event = Event::Executed {
//!     time: 2,
//!     pid: 1,
//!     queue: 0,
//!     ran_for: 2,
//!     remaining: 2,
//!     wait_time: 2,
//! };
//!
//! assert_eq!(event.time(), 2);
//! assert_eq!(event.event_type(), "Executed");
//! ```

use serde::Serialize;

/// Simulation event capturing a state change.
///
/// `time` is the global elapsed counter when the event was recorded.
/// Events are logged in the order they occur.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum Event {
    /// Process placed in the queue matching its initial priority
    Enqueued { time: u64, pid: i64, queue: usize },

    /// Process ran one slice
    Executed {
        time: u64,
        pid: i64,
        /// Queue the process was taken from
        queue: usize,
        /// Units of CPU consumed by this slice
        ran_for: u64,
        /// CPU time still needed after the slice
        remaining: u64,
        /// Total wait charge after this slice
        wait_time: u64,
    },

    /// Aging rule fired (old == new when already at the last queue)
    Aged {
        time: u64,
        pid: i64,
        old_priority: usize,
        new_priority: usize,
    },

    /// Unfinished process appended to the queue matching its priority
    Requeued { time: u64, pid: i64, queue: usize },

    /// Process finished
    Completed { time: u64, pid: i64, wait_time: u64 },
}

impl Event {
    pub fn time(&self) -> u64 {
        match self {
            Event::Enqueued { time, .. } => *time,
            Event::Executed { time, .. } => *time,
            Event::Aged { time, .. } => *time,
            Event::Requeued { time, .. } => *time,
            Event::Completed { time, .. } => *time,
        }
    }

    pub fn pid(&self) -> i64 {
        match self {
            Event::Enqueued { pid, .. } => *pid,
            Event::Executed { pid, .. } => *pid,
            Event::Aged { pid, .. } => *pid,
            Event::Requeued { pid, .. } => *pid,
            Event::Completed { pid, .. } => *pid,
        }
    }

    pub fn event_type(&self) -> &'static str {
        match self {
            Event::Enqueued { .. } => "Enqueued",
            Event::Executed { .. } => "Executed",
            Event::Aged { .. } => "Aged",
            Event::Requeued { .. } => "Requeued",
            Event::Completed { .. } => "Completed",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<Event>,
}

impl EventLog {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn log(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn events_at_time(&self, time: u64) -> Vec<&Event> {
        self.events.iter().filter(|e| e.time() == time).collect()
    }

    pub fn events_of_type(&self, event_type: &str) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| e.event_type() == event_type)
            .collect()
    }

    pub fn events_for_process(&self, pid: i64) -> Vec<&Event> {
        self.events.iter().filter(|e| e.pid() == pid).collect()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}
