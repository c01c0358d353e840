use crate::common::ConfigError;
use crate::core::cache::geometry::Geometry;
use crate::core::cache::protocol::CoherenceProtocol;
use serde::{Deserialize, Serialize};
use std::fmt;

const DEFAULT_CAPACITY: usize = 32 * 1024;
const DEFAULT_BLOCK_SIZE: usize = 64;
const DEFAULT_ASSOCIATIVITY: usize = 4;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub cache: CacheConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Parses a configuration from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}

/// Victim selection strategy.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Replacement {
    /// Pointer advances past a hit way only when it points at it.
    #[default]
    Clock,
    /// Pointer always advances past the last touched way.
    NextWay,
    /// Least recently used.
    Lru,
}

impl fmt::Display for Replacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Replacement::Clock => f.write_str("clock"),
            Replacement::NextWay => f.write_str("next-way"),
            Replacement::Lru => f.write_str("lru"),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    #[serde(default = "d_c_capacity")]
    pub capacity: usize,

    #[serde(default = "d_c_block")]
    pub block_size: usize,

    #[serde(default = "d_c_assoc")]
    pub associativity: usize,

    #[serde(default)]
    pub protocol: CoherenceProtocol,

    #[serde(default)]
    pub replacement: Replacement,

    /// When set, a snoop that invalidates a line also makes it the next
    /// victim of its set.
    #[serde(default)]
    pub invalidate_resets_victim: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: d_c_capacity(),
            block_size: d_c_block(),
            associativity: d_c_assoc(),
            protocol: CoherenceProtocol::default(),
            replacement: Replacement::default(),
            invalidate_resets_victim: false,
        }
    }
}

impl CacheConfig {
    /// Validates the dimensions and derives the cache geometry.
    pub fn geometry(&self) -> Result<Geometry, ConfigError> {
        Geometry::new(self.capacity, self.block_size, self.associativity)
    }
}

fn d_c_capacity() -> usize {
    DEFAULT_CAPACITY
}

fn d_c_block() -> usize {
    DEFAULT_BLOCK_SIZE
}

fn d_c_assoc() -> usize {
    DEFAULT_ASSOCIATIVITY
}

/// Report format.
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: ReportFormat,

    /// Log the set and way of every access at trace level.
    #[serde(default)]
    pub trace_accesses: bool,
}
