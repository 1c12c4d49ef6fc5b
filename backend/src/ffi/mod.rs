//! Python bindings (feature `pyo3`)
//!
//! Thin wrapper so a Python front end can hand over process triples and
//! read back results. All validation happens in the core.

pub mod scheduler;
pub mod types;
