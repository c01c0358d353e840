//! Trace Replay.
//!
//! Feeds parsed events through a cache in order, one at a time.

use super::trace::TraceEvent;
use crate::common::ConfigError;
use crate::config::Config;
use crate::core::cache::geometry::Geometry;
use crate::core::cache::Cache;
use crate::core::traits::{LogTrace, NullTrace, StatsSink, TraceHook};
use crate::stats::CacheStats;

/// Replays `events` against `cache` and returns the number of hits.
pub fn replay<S: StatsSink, T: TraceHook>(cache: &mut Cache<S, T>, events: &[TraceEvent]) -> usize {
    events
        .iter()
        .filter(|e| cache.access(e.addr, e.action))
        .count()
}

/// Builds the configured cache, replays `events`, and returns the collected
/// statistics.
///
/// Per-access set/way logging goes through the `log` facade only when
/// `output.trace_accesses` is enabled.
pub fn run(config: &Config, events: &[TraceEvent]) -> Result<CacheStats, ConfigError> {
    let geometry = config.cache.geometry()?;
    let stats = CacheStats::new(geometry.block_size);

    log::info!(
        "simulating {} B cache: {} sets x {} ways, {} B blocks, protocol {}, replacement {}",
        geometry.capacity,
        geometry.set_count,
        geometry.associativity,
        geometry.block_size,
        config.cache.protocol,
        config.cache.replacement
    );
    log::debug!(
        "address split: tag {} / index {} / offset {} bits",
        geometry.tag_bits,
        geometry.index_bits,
        geometry.offset_bits
    );

    let stats = if config.output.trace_accesses {
        run_with(geometry, config, stats, LogTrace, events)
    } else {
        run_with(geometry, config, stats, NullTrace, events)
    };
    log::info!("replayed {} events", events.len());
    Ok(stats)
}

fn run_with<T: TraceHook>(
    geometry: Geometry,
    config: &Config,
    stats: CacheStats,
    trace: T,
    events: &[TraceEvent],
) -> CacheStats {
    let mut cache = Cache::from_geometry(geometry, &config.cache, stats, trace);
    replay(&mut cache, events);
    cache.into_stats()
}
