//! Trace-Driven Cache Coherence Simulator Library.
//!
//! This crate models a single set-associative cache replaying a trace of memory
//! events. Local loads and stores are combined with externally supplied snoop
//! events (another core's load or store miss on the same address) to drive
//! either no coherence protocol at all or the MSI protocol.
//!
//! # Architecture
//!
//! * **Geometry**: Bit-field widths and the address decoder (tag, index, offset).
//! * **Cache**: The access engine, line storage, and per-line coherence state machine.
//! * **Policies**: Pluggable victim selection (clock pointer, next-way, LRU).
//! * **Hooks**: Statistics sink and per-access trace hook consumed by the engine.
//!
//! # Modules
//!
//! * `common`: Shared types (actions) and error handling.
//! * `config`: Configuration loading and parsing.
//! * `core`: Cache engine implementation and the hook traits.
//! * `sim`: Trace reader and replay driver.
//! * `stats`: Access statistics collection and reporting.

/// Shared types and error handling.
///
/// Provides the memory action classification consumed by the engine and the
/// error types returned by configuration and trace parsing.
pub mod common;

/// Configuration system for cache geometry, protocol, and report settings.
///
/// Loads and parses TOML configuration files to customize the simulated cache.
pub mod config;

/// Cache engine implementation.
///
/// Implements address decoding, set lookup, victim selection, and the
/// coherence state machine, along with the hook traits the engine reports to.
pub mod core;

/// Trace reading and replay orchestration.
///
/// Parses text traces into access events and feeds them through a cache.
pub mod sim;

/// Access statistics collection and reporting.
///
/// Tracks hits, misses, writebacks, and upgrade misses, and derives bus traffic
/// figures for the final report.
pub mod stats;
