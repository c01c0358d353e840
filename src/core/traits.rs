//! Cache Engine Hooks.
//!
//! The engine reports every access to two collaborators owned alongside the
//! cache: a statistics sink, which receives the outcome of the access, and a
//! trace hook, which is told which set and way were involved.

use crate::common::Action;

/// Result of a single cache access, as reported to a [`StatsSink`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccessOutcome {
    /// The action that was applied.
    pub action: Action,
    /// Whether the access hit.
    pub hit: bool,
    /// Whether a dirty line was flushed.
    pub writeback: bool,
    /// Whether a store hit a Shared line and had to acquire write permission.
    pub upgrade_miss: bool,
}

/// Receives one outcome per cache access.
pub trait StatsSink {
    /// Records the outcome of an access.
    fn record(&mut self, outcome: &AccessOutcome);
}

impl StatsSink for Vec<AccessOutcome> {
    fn record(&mut self, outcome: &AccessOutcome) {
        self.push(*outcome);
    }
}

/// Receives the set and way touched by each cache access.
///
/// Both methods are called exactly once per access, set first.
pub trait TraceHook {
    /// Records the set index selected by the address.
    fn log_set(&mut self, set: usize);

    /// Records the way that hit, was filled, or is the current victim.
    fn log_way(&mut self, way: usize);
}

/// Trace hook that forwards events to the `log` facade at trace level.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogTrace;

impl TraceHook for LogTrace {
    fn log_set(&mut self, set: usize) {
        log::trace!("set {}", set);
    }

    fn log_way(&mut self, way: usize) {
        log::trace!("way {}", way);
    }
}

/// Trace hook that discards events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullTrace;

impl TraceHook for NullTrace {
    fn log_set(&mut self, _set: usize) {}

    fn log_way(&mut self, _way: usize) {}
}

/// Trace hook that keeps every `(set, way)` pair it is given.
#[derive(Clone, Debug, Default)]
pub struct RecordingTrace {
    /// Touched `(set, way)` pairs in access order.
    pub events: Vec<(usize, usize)>,
    pending_set: Option<usize>,
}

impl TraceHook for RecordingTrace {
    fn log_set(&mut self, set: usize) {
        self.pending_set = Some(set);
    }

    fn log_way(&mut self, way: usize) {
        let set = self.pending_set.take().unwrap_or(0);
        self.events.push((set, way));
    }
}
