//! Cache Line Storage.

/// Coherence state of a line.
///
/// `Valid` is used only when no coherence protocol is active; MSI uses
/// `Shared` and `Modified` instead. Every line starts `Invalid`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LineState {
    /// Holds no usable data; the tag is stale.
    #[default]
    Invalid,
    /// Present (no-protocol caches only).
    Valid,
    /// Present and clean, possibly cached elsewhere.
    Shared,
    /// Present, exclusively owned, and dirty.
    Modified,
}

impl LineState {
    /// Returns `true` for every state except `Invalid`.
    pub fn is_valid(self) -> bool {
        self != LineState::Invalid
    }
}

/// A single way of a set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheLine {
    pub tag: u32,
    pub dirty: bool,
    pub state: LineState,
}

impl CacheLine {
    /// Returns `true` if the line holds `tag` in a usable state.
    pub fn holds(&self, tag: u32) -> bool {
        self.state.is_valid() && self.tag == tag
    }

    /// Returns `true` if the line's stale tag equals `tag` but it is invalid.
    pub fn is_stale_copy_of(&self, tag: u32) -> bool {
        !self.state.is_valid() && self.tag == tag
    }

    /// Returns `true` if evicting this line requires a writeback.
    pub fn needs_writeback(&self) -> bool {
        self.state.is_valid() && self.dirty
    }
}

/// Where a lookup found (or will place) a block within a set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lookup {
    /// The block is present in this way.
    Hit(usize),
    /// The block's tag sits in this way, but the line is invalid.
    Stale(usize),
    /// The block is absent.
    Absent,
}

/// One set: a fixed number of ways.
#[derive(Clone, Debug)]
pub struct CacheSet {
    lines: Vec<CacheLine>,
}

impl CacheSet {
    /// Creates a set of `ways` invalid lines.
    pub fn new(ways: usize) -> Self {
        Self {
            lines: vec![CacheLine::default(); ways],
        }
    }

    /// Searches the set for `tag`.
    ///
    /// A usable copy wins over a stale one if both are present.
    pub fn lookup(&self, tag: u32) -> Lookup {
        if let Some(way) = self.lines.iter().position(|l| l.holds(tag)) {
            return Lookup::Hit(way);
        }
        match self.lines.iter().position(|l| l.is_stale_copy_of(tag)) {
            Some(way) => Lookup::Stale(way),
            None => Lookup::Absent,
        }
    }

    pub fn line(&self, way: usize) -> &CacheLine {
        &self.lines[way]
    }

    pub fn line_mut(&mut self, way: usize) -> &mut CacheLine {
        &mut self.lines[way]
    }

    pub fn iter(&self) -> impl Iterator<Item = &CacheLine> {
        self.lines.iter()
    }
}
