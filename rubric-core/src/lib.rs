//! Core types, errors, configuration, and tracing setup for Rubric.
//!
//! The engine itself lives in `rubric-analysis`; this crate carries the
//! shared plumbing so every subsystem reports errors and reads
//! configuration the same way.

pub mod config;
pub mod errors;
pub mod logging;
