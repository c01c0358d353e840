//! Test module organization.
//!
//! This module organizes all integration tests for the cache simulator.




/// End-to-end trace replay tests.
mod integration_tests;

/// Coherence protocol transition tests.
mod protocol_tests;



/// Trace parsing tests.
mod trace_tests;
