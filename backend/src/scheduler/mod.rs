//! Scheduler - multilevel feedback queue simulation
//!
//! See `engine.rs` for the simulation loop and its aging rule.

pub mod config;
pub mod engine;
pub mod summary;

// Re-export main types for convenience
pub use config::SchedulerConfig;
pub use engine::{Scheduler, SchedulerError};
pub use summary::{ProcessSummary, RunSummary};
