//! Simulation harness.
//!
//! Reads traces from disk and replays them against a configured cache.

/// Trace replay and run orchestration.
pub mod runner;

/// Trace file parsing.
pub mod trace;

pub use runner::{replay, run};
pub use trace::{load_trace, parse_trace, TraceEvent};
