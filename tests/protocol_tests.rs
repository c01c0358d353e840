//! Integration tests for coherence protocol transitions.

use cachesim::common::Action;
use cachesim::core::cache::line::{CacheLine, LineState};
use cachesim::core::cache::protocol::{CoherenceProtocol, Transition};

fn line(state: LineState, dirty: bool) -> CacheLine {
    CacheLine {
        tag: 0x42,
        dirty,
        state,
    }
}

fn hit(state: LineState, dirty: bool, writeback: bool, upgrade_miss: bool) -> Transition {
    Transition {
        state,
        dirty,
        hit: true,
        writeback,
        upgrade_miss,
    }
}

/// Tests the full MSI hit-path table.
#[test]
fn test_msi_hit_table() {
    use LineState::{Invalid, Modified, Shared};
    let msi = CoherenceProtocol::Msi;
    let shared = line(Shared, false);
    let modified = line(Modified, true);

    let cases = [
        (shared, Action::Load, hit(Shared, false, false, false)),
        (shared, Action::Store, hit(Modified, true, false, true)),
        (shared, Action::LoadMiss, hit(Shared, false, false, false)),
        (shared, Action::StoreMiss, hit(Invalid, false, false, false)),
        (modified, Action::Load, hit(Modified, true, false, false)),
        (modified, Action::Store, hit(Modified, true, false, false)),
        (modified, Action::LoadMiss, hit(Shared, false, true, false)),
        (modified, Action::StoreMiss, hit(Invalid, false, true, false)),
    ];

    for (l, action, expected) in cases {
        assert_eq!(msi.on_hit(&l, action), expected, "{:?} + {}", l.state, action);
    }
}

/// Tests that only a store to a Shared line is an upgrade miss.
#[test]
fn test_msi_upgrade_only_from_shared() {
    let msi = CoherenceProtocol::Msi;
    for state in [LineState::Shared, LineState::Modified] {
        for action in Action::ALL {
            let t = msi.on_hit(&line(state, state == LineState::Modified), action);
            let expected = state == LineState::Shared && action == Action::Store;
            assert_eq!(t.upgrade_miss, expected, "{:?} + {}", state, action);
        }
    }
}

/// Tests the no-protocol hit path.
#[test]
fn test_no_protocol_hits() {
    let none = CoherenceProtocol::None;
    let clean = line(LineState::Valid, false);

    assert_eq!(
        none.on_hit(&clean, Action::Load),
        hit(LineState::Valid, false, false, false)
    );
    assert_eq!(
        none.on_hit(&clean, Action::Store),
        hit(LineState::Valid, true, false, false)
    );

    let dirty = line(LineState::Valid, true);
    for action in [Action::LoadMiss, Action::StoreMiss] {
        assert_eq!(
            none.on_hit(&dirty, action),
            hit(LineState::Valid, true, false, false)
        );
    }
}

/// Tests the state taken by freshly installed blocks.
#[test]
fn test_install_state() {
    assert_eq!(
        CoherenceProtocol::Msi.install_state(Action::Load),
        LineState::Shared
    );
    assert_eq!(
        CoherenceProtocol::Msi.install_state(Action::Store),
        LineState::Modified
    );
    assert_eq!(
        CoherenceProtocol::None.install_state(Action::Load),
        LineState::Valid
    );
    assert_eq!(
        CoherenceProtocol::None.install_state(Action::Store),
        LineState::Valid
    );
}

/// Tests line state helpers.
#[test]
fn test_line_state_helpers() {
    assert!(!LineState::Invalid.is_valid());
    assert!(LineState::Valid.is_valid());
    assert!(LineState::Shared.is_valid());
    assert!(LineState::Modified.is_valid());

    let stale = line(LineState::Invalid, true);
    assert!(!stale.holds(0x42));
    assert!(stale.is_stale_copy_of(0x42));
    assert!(!stale.needs_writeback());

    let held = line(LineState::Modified, true);
    assert!(held.holds(0x42));
    assert!(!held.holds(0x43));
    assert!(held.needs_writeback());
}
