//! Common types used throughout the cache simulator.
//!
//! This module provides the action classification and the error types that
//! are shared between the engine, the configuration layer, and the trace
//! reader.

/// Memory action type definitions.
pub mod data;

/// Error types for configuration, trace parsing, and simulation runs.
pub mod error;

pub use data::Action;
pub use error::{ConfigError, SimError, TraceError, TraceErrorKind};
