//! Domain models for the scheduling simulator

pub mod event;
pub mod process;
pub mod queues;

// Re-exports
pub use event::{Event, EventLog};
pub use process::{Process, ProcessError};
pub use queues::PriorityQueues;
