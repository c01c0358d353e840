//! Least Recently Used (LRU) Replacement Policy.
//!
//! This policy evicts the line that has gone longest without a local access.
//! It maintains a usage stack for each set. A hit or an install moves the way
//! to the top (Most Recently Used position); an invalidated way drops straight
//! to the bottom so it is reused first.

use super::ReplacementPolicy;

/// LRU Policy state.
pub struct LruPolicy {
    /// A vector of usage stacks (one per set).
    /// Index 0 is MRU, last index is LRU.
    usage: Vec<Vec<usize>>,
}

impl LruPolicy {
    /// Creates a new LRU policy instance.
    ///
    /// Way 0 starts at the LRU end, so an empty set fills in way order.
    ///
    /// # Arguments
    ///
    /// * `sets` - The number of sets in the cache.
    /// * `ways` - The associativity (number of ways) of the cache.
    pub fn new(sets: usize, ways: usize) -> Self {
        let usage = (0..sets).map(|_| (0..ways).rev().collect()).collect();
        Self { usage }
    }

    fn take(stack: &mut Vec<usize>, way: usize) {
        if let Some(pos) = stack.iter().position(|&x| x == way) {
            stack.remove(pos);
        }
    }
}

impl ReplacementPolicy for LruPolicy {
    /// Moves the accessed `way` to the MRU position.
    fn update(&mut self, set: usize, way: usize) {
        let stack = &mut self.usage[set];
        Self::take(stack, way);
        stack.insert(0, way);
    }

    fn on_fill(&mut self, set: usize, way: usize) {
        self.update(set, way);
    }

    /// Moves the invalidated `way` to the LRU position.
    fn on_invalidate(&mut self, set: usize, way: usize) {
        let stack = &mut self.usage[set];
        Self::take(stack, way);
        stack.push(way);
    }

    /// Returns the way at the bottom of the usage stack.
    fn get_victim(&self, set: usize) -> usize {
        self.usage[set].last().copied().unwrap_or(0)
    }
}
