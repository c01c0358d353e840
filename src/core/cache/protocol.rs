//! Coherence Protocols.
//!
//! The protocol decides how a line reacts to an action once the engine has
//! found it. It is a closed set: either no protocol, where snoop events are
//! observed but ignored, or MSI.
//!
//! # MSI transitions on a present line
//!
//! | state    | Load     | Store            | LoadMiss             | StoreMiss             |
//! |----------|----------|------------------|----------------------|-----------------------|
//! | Shared   | Shared   | Modified, upgrade| Shared               | Invalid               |
//! | Modified | Modified | Modified         | Shared, writeback    | Invalid, writeback    |
//!
//! All of the above count as hits.

use super::line::{CacheLine, LineState};
use crate::common::Action;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Coherence protocol variant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoherenceProtocol {
    /// Plain cache with a single `Valid` state.
    #[default]
    None,
    /// Modified / Shared / Invalid.
    Msi,
}

/// Outcome of applying an action to a present line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    /// State after the action.
    pub state: LineState,
    /// Dirty bit after the action.
    pub dirty: bool,
    /// Whether the access counts as a hit.
    pub hit: bool,
    /// Whether the line's data was flushed.
    pub writeback: bool,
    /// Whether a store had to acquire write permission.
    pub upgrade_miss: bool,
}

impl Transition {
    fn keep(line: &CacheLine) -> Self {
        Self {
            state: line.state,
            dirty: line.dirty,
            hit: true,
            writeback: false,
            upgrade_miss: false,
        }
    }
}

impl CoherenceProtocol {
    /// Computes the reaction of a present line to `action`.
    ///
    /// The caller guarantees that `line` holds the requested block in a usable
    /// state.
    pub fn on_hit(self, line: &CacheLine, action: Action) -> Transition {
        let keep = Transition::keep(line);
        match self {
            CoherenceProtocol::None => match action {
                Action::Store => Transition {
                    dirty: true,
                    ..keep
                },
                Action::Load | Action::LoadMiss | Action::StoreMiss => keep,
            },
            CoherenceProtocol::Msi => match (line.state, action) {
                (_, Action::Load) => keep,
                (state, Action::Store) => Transition {
                    state: LineState::Modified,
                    dirty: true,
                    upgrade_miss: state == LineState::Shared,
                    ..keep
                },
                (LineState::Shared, Action::StoreMiss) => Transition {
                    state: LineState::Invalid,
                    ..keep
                },
                (LineState::Modified, Action::LoadMiss) => Transition {
                    state: LineState::Shared,
                    dirty: false,
                    writeback: line.dirty,
                    ..keep
                },
                (LineState::Modified, Action::StoreMiss) => Transition {
                    state: LineState::Invalid,
                    dirty: false,
                    writeback: line.dirty,
                    ..keep
                },
                (_, Action::LoadMiss | Action::StoreMiss) => keep,
            },
        }
    }

    /// State a block takes when a local `action` installs it.
    ///
    /// Only local actions install blocks.
    pub fn install_state(self, action: Action) -> LineState {
        match (self, action) {
            (CoherenceProtocol::None, _) => LineState::Valid,
            (CoherenceProtocol::Msi, Action::Store) => LineState::Modified,
            (CoherenceProtocol::Msi, _) => LineState::Shared,
        }
    }
}

impl fmt::Display for CoherenceProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoherenceProtocol::None => f.write_str("none"),
            CoherenceProtocol::Msi => f.write_str("msi"),
        }
    }
}
