//! Set-Associative Cache Engine.
//!
//! This module ties together the cache parts: the geometry splits the
//! address, the set lookup finds the block, the coherence protocol decides
//! the line's reaction, and the replacement policy picks victims. Every access
//! is reported once to the statistics sink and once to the trace hook.
//!
//! # Miss handling
//!
//! A snoop event for a block this cache does not hold changes nothing. A
//! local miss installs the block, evicting the policy's victim (written back
//! if dirty). Under MSI, if the set still holds an invalidated copy of the
//! same block, that way is reused instead and the access is still a miss.
//! Without a protocol the victim is always taken from the policy.

/// Bit-field widths and address decoding.
pub mod geometry;

/// Line and set storage.
pub mod line;

/// Victim selection strategies.
pub mod policies;

/// Coherence protocols.
pub mod protocol;

use self::geometry::{AddressDecoder, Geometry};
use self::line::{CacheLine, CacheSet, LineState, Lookup};
use self::policies::ReplacementPolicy;
use self::protocol::CoherenceProtocol;
use super::traits::{AccessOutcome, LogTrace, StatsSink, TraceHook};
use crate::common::{Action, ConfigError};
use crate::config::CacheConfig;
use crate::stats::CacheStats;

/// A simulated cache.
///
/// Generic over the statistics sink `S` and the trace hook `T`, both owned by
/// the cache and reachable through accessors.
pub struct Cache<S: StatsSink = CacheStats, T: TraceHook = LogTrace> {
    geometry: Geometry,
    decoder: AddressDecoder,
    sets: Vec<CacheSet>,
    protocol: CoherenceProtocol,
    policy: Box<dyn ReplacementPolicy>,
    invalidate_resets_victim: bool,
    stats: S,
    trace: T,
}

impl Cache {
    /// Creates a cache that collects `CacheStats` and logs touched lines
    /// through the `log` facade.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the geometry in `config` is invalid.
    pub fn new(config: &CacheConfig) -> Result<Self, ConfigError> {
        Cache::with_hooks(config, CacheStats::new(config.block_size), LogTrace)
    }
}

impl<S: StatsSink, T: TraceHook> Cache<S, T> {
    /// Creates a cache reporting to the given sink and trace hook.
    ///
    /// All lines start invalid with tag 0 and clean; every set's replacement
    /// state starts at way 0.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the geometry in `config` is invalid.
    pub fn with_hooks(config: &CacheConfig, stats: S, trace: T) -> Result<Self, ConfigError> {
        let geometry = config.geometry()?;
        Ok(Cache::from_geometry(geometry, config, stats, trace))
    }

    /// Creates a cache from an already validated `geometry`.
    ///
    /// Only the protocol, replacement, and invalidation settings are read
    /// from `config`.
    pub fn from_geometry(geometry: Geometry, config: &CacheConfig, stats: S, trace: T) -> Self {
        let sets = (0..geometry.set_count)
            .map(|_| CacheSet::new(geometry.associativity))
            .collect();
        let policy = policies::build(
            config.replacement,
            geometry.set_count,
            geometry.associativity,
        );

        Self {
            geometry,
            decoder: geometry.decoder(),
            sets,
            protocol: config.protocol,
            policy,
            invalidate_resets_victim: config.invalidate_resets_victim,
            stats,
            trace,
        }
    }

    /// Applies `action` to `addr` and returns `true` on a hit.
    pub fn access(&mut self, addr: u32, action: Action) -> bool {
        self.apply(addr, action).hit
    }

    /// Applies `action` to `addr` and returns the full outcome.
    ///
    /// The same outcome is passed to the statistics sink.
    pub fn apply(&mut self, addr: u32, action: Action) -> AccessOutcome {
        let tag = self.decoder.tag_of(addr);
        let index = self.decoder.index_of(addr);
        self.trace.log_set(index);

        let set = &mut self.sets[index];
        let outcome = match set.lookup(tag) {
            Lookup::Hit(way) => {
                self.trace.log_way(way);
                let line = set.line_mut(way);
                let t = self.protocol.on_hit(line, action);
                line.state = t.state;
                line.dirty = t.dirty;

                if action.is_local() {
                    self.policy.update(index, way);
                } else if t.state == LineState::Invalid && self.invalidate_resets_victim {
                    self.policy.on_invalidate(index, way);
                }

                AccessOutcome {
                    action,
                    hit: t.hit,
                    writeback: t.writeback,
                    upgrade_miss: t.upgrade_miss,
                }
            }
            _ if action.is_snoop() => {
                self.trace.log_way(self.policy.get_victim(index));
                AccessOutcome {
                    action,
                    hit: false,
                    writeback: false,
                    upgrade_miss: false,
                }
            }
            lookup => {
                let way = match (lookup, self.protocol) {
                    (Lookup::Stale(way), CoherenceProtocol::Msi) => way,
                    _ => self.policy.get_victim(index),
                };
                self.trace.log_way(way);

                let line = set.line_mut(way);
                let writeback = line.needs_writeback();
                *line = CacheLine {
                    tag,
                    dirty: action == Action::Store,
                    state: self.protocol.install_state(action),
                };
                self.policy.on_fill(index, way);

                AccessOutcome {
                    action,
                    hit: false,
                    writeback,
                    upgrade_miss: false,
                }
            }
        };

        self.stats.record(&outcome);
        outcome
    }

    /// Returns `true` if the block containing `addr` is present.
    pub fn contains(&self, addr: u32) -> bool {
        self.line_for(addr).is_some()
    }

    /// Returns the line holding the block containing `addr`, if present.
    pub fn line_for(&self, addr: u32) -> Option<&CacheLine> {
        let set = &self.sets[self.decoder.index_of(addr)];
        match set.lookup(self.decoder.tag_of(addr)) {
            Lookup::Hit(way) => Some(set.line(way)),
            Lookup::Stale(_) | Lookup::Absent => None,
        }
    }

    /// Returns the coherence state of the block containing `addr`.
    pub fn state_of(&self, addr: u32) -> LineState {
        self.line_for(addr).map_or(LineState::Invalid, |l| l.state)
    }

    /// Returns way `way` of set `set`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn line(&self, set: usize, way: usize) -> &CacheLine {
        self.sets[set].line(way)
    }

    /// Returns the way the next install into `set` would evict.
    pub fn victim_of(&self, set: usize) -> usize {
        self.policy.get_victim(set)
    }

    /// Number of lines currently holding a block.
    pub fn occupancy(&self) -> usize {
        self.sets
            .iter()
            .flat_map(|s| s.iter())
            .filter(|l| l.state.is_valid())
            .count()
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn decoder(&self) -> &AddressDecoder {
        &self.decoder
    }

    pub fn protocol(&self) -> CoherenceProtocol {
        self.protocol
    }

    pub fn stats(&self) -> &S {
        &self.stats
    }

    pub fn trace_hook(&self) -> &T {
        &self.trace
    }

    /// Consumes the cache and returns its statistics sink.
    pub fn into_stats(self) -> S {
        self.stats
    }
}
