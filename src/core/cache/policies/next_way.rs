//! Next-Way Replacement Policy.
//!
//! Like the clock policy, each set keeps one victim pointer. Here every local
//! touch, hit or install, moves the pointer to the way after the touched one,
//! regardless of where it pointed before.

use super::ReplacementPolicy;

/// Next-way policy state.
pub struct NextWayPolicy {
    pointers: Vec<usize>,
    ways: usize,
}

impl NextWayPolicy {
    /// Creates a new next-way policy for `sets` sets of `ways` ways.
    pub fn new(sets: usize, ways: usize) -> Self {
        Self {
            pointers: vec![0; sets],
            ways,
        }
    }
}

impl ReplacementPolicy for NextWayPolicy {
    fn update(&mut self, set: usize, way: usize) {
        self.pointers[set] = (way + 1) % self.ways;
    }

    fn on_fill(&mut self, set: usize, way: usize) {
        self.update(set, way);
    }

    fn on_invalidate(&mut self, set: usize, way: usize) {
        self.pointers[set] = way;
    }

    fn get_victim(&self, set: usize) -> usize {
        self.pointers[set]
    }
}
