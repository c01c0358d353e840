//! Clock Replacement Policy.
//!
//! Each set keeps a single victim pointer, starting at way 0. An install
//! always moves the pointer to the way after the one just filled. A local hit
//! moves it only when the hit way is the one currently pointed at, so a block
//! that is about to be evicted gets a second chance when it is used.

use super::ReplacementPolicy;

/// Clock policy state.
pub struct ClockPolicy {
    /// Victim pointer per set.
    pointers: Vec<usize>,
    ways: usize,
}

impl ClockPolicy {
    /// Creates a new clock policy instance.
    ///
    /// # Arguments
    ///
    /// * `sets` - The number of sets in the cache.
    /// * `ways` - The associativity (number of ways) of the cache.
    pub fn new(sets: usize, ways: usize) -> Self {
        Self {
            pointers: vec![0; sets],
            ways,
        }
    }

    fn advance_past(&mut self, set: usize, way: usize) {
        self.pointers[set] = (way + 1) % self.ways;
    }
}

impl ReplacementPolicy for ClockPolicy {
    fn update(&mut self, set: usize, way: usize) {
        if self.pointers[set] == way {
            self.advance_past(set, way);
        }
    }

    fn on_fill(&mut self, set: usize, way: usize) {
        self.advance_past(set, way);
    }

    /// Points the set at the freshly invalidated way.
    fn on_invalidate(&mut self, set: usize, way: usize) {
        self.pointers[set] = way;
    }

    fn get_victim(&self, set: usize) -> usize {
        self.pointers[set]
    }
}
