//! Memory Action Types.
//!
//! This module defines the classification of events replayed against the
//! cache. Local actions come from the CPU that owns the cache; snoop actions
//! describe another core's miss on the same address and are only meaningful
//! when a coherence protocol is active.

use std::fmt;

/// Type of event applied to the cache.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    /// Local data read.
    Load,

    /// Local data write.
    ///
    /// Marks the touched line dirty, and under MSI requires the line to be
    /// held in the Modified state.
    Store,

    /// Another core missed on a load to this address.
    ///
    /// A Modified copy held here must be written back and demoted to Shared.
    LoadMiss,

    /// Another core missed on a store to this address.
    ///
    /// Any copy held here must be invalidated, written back first if dirty.
    StoreMiss,
}

impl Action {
    /// All actions, in trace op-code order.
    pub const ALL: [Action; 4] = [
        Action::Load,
        Action::Store,
        Action::LoadMiss,
        Action::StoreMiss,
    ];

    /// Returns `true` for actions issued by the local CPU.
    pub fn is_local(self) -> bool {
        matches!(self, Action::Load | Action::Store)
    }

    /// Returns `true` for externally observed coherence events.
    pub fn is_snoop(self) -> bool {
        !self.is_local()
    }

    /// Numeric op code used in trace files.
    pub fn code(self) -> u8 {
        match self {
            Action::Load => 0,
            Action::Store => 1,
            Action::LoadMiss => 2,
            Action::StoreMiss => 3,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::Load => "load",
            Action::Store => "store",
            Action::LoadMiss => "ld_miss",
            Action::StoreMiss => "st_miss",
        };
        f.write_str(name)
    }
}
