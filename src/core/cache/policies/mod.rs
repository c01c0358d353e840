//! Replacement Policies.
//!
//! A replacement policy keeps per-set bookkeeping and names the way to evict
//! when a new block is installed. The engine reports three kinds of events:
//! local hits (`update`), installs (`on_fill`), and, when enabled, snoop
//! invalidations (`on_invalidate`). Snoop hits are never reported.

use crate::config::Replacement;

/// Round-robin pointer that only moves past the way it points at.
pub mod clock;

/// Least Recently Used stack.
pub mod lru;

/// Pointer that always moves past the last touched way.
pub mod next_way;

pub use clock::ClockPolicy;
pub use lru::LruPolicy;
pub use next_way::NextWayPolicy;

/// Victim selection strategy for a set-associative cache.
pub trait ReplacementPolicy {
    /// Records a local hit on `way` of `set`.
    fn update(&mut self, set: usize, way: usize);

    /// Records that a block was just installed into `way` of `set`.
    fn on_fill(&mut self, set: usize, way: usize);

    /// Records that a snoop invalidated `way` of `set`.
    ///
    /// The default ignores invalidations.
    fn on_invalidate(&mut self, _set: usize, _way: usize) {}

    /// Returns the way to evict from `set`.
    ///
    /// Always in `[0, ways)`.
    fn get_victim(&self, set: usize) -> usize;
}

/// Creates the policy selected by `kind` for a cache of `sets` x `ways`.
pub fn build(kind: Replacement, sets: usize, ways: usize) -> Box<dyn ReplacementPolicy> {
    match kind {
        Replacement::Clock => Box::new(ClockPolicy::new(sets, ways)),
        Replacement::NextWay => Box::new(NextWayPolicy::new(sets, ways)),
        Replacement::Lru => Box::new(LruPolicy::new(sets, ways)),
    }
}
