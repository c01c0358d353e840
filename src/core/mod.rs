//! Cache engine implementation.
//!
//! The `cache` module holds the access engine and its parts (geometry,
//! lines, protocols, replacement policies). The `traits` module defines the
//! hooks the engine reports to.

/// Set-associative cache with coherence support.
pub mod cache;

/// Statistics and trace hooks consumed by the engine.
pub mod traits;

pub use cache::Cache;
pub use traits::{AccessOutcome, StatsSink, TraceHook};
