//! Access statistics collection and reporting.
//!
//! Tracks hit, miss, writeback, and upgrade-miss counts for one cache, and
//! derives hit rate and bus traffic when the run is reported.

use crate::common::Action;
use crate::core::traits::{AccessOutcome, StatsSink};
use serde::Serialize;

/// Statistics for a single simulated cache.
///
/// Hits and misses count CPU accesses only. Snoop events are tallied
/// separately; their writebacks are included in `writebacks`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Block size in bytes, used to derive traffic.
    pub block_size: usize,

    pub cpu_accesses: u64,
    pub loads: u64,
    pub stores: u64,
    pub hits: u64,
    pub misses: u64,

    pub snoop_hits: u64,
    pub snoop_misses: u64,

    pub writebacks: u64,
    pub upgrade_misses: u64,
}

/// Derived figures for the end-of-run report.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StatsReport {
    #[serde(flatten)]
    pub counts: CacheStats,
    pub hit_rate: f64,
    pub bytes_bus_to_cache: u64,
    pub bytes_cache_to_bus_wb: u64,
    pub bytes_total_traffic: u64,
}

impl CacheStats {
    /// Creates empty statistics for a cache with `block_size` byte blocks.
    pub fn new(block_size: usize) -> Self {
        Self {
            block_size,
            ..Self::default()
        }
    }

    /// Fraction of CPU accesses that hit, in `[0, 1]`.
    pub fn hit_rate(&self) -> f64 {
        if self.cpu_accesses == 0 {
            0.0
        } else {
            self.hits as f64 / self.cpu_accesses as f64
        }
    }

    /// Bytes fetched into the cache: one block per CPU miss.
    pub fn bytes_bus_to_cache(&self) -> u64 {
        self.misses * self.block_size as u64
    }

    /// Bytes flushed by writebacks.
    pub fn bytes_cache_to_bus_wb(&self) -> u64 {
        self.writebacks * self.block_size as u64
    }

    /// Builds the final report.
    pub fn report(&self) -> StatsReport {
        let bus_to_cache = self.bytes_bus_to_cache();
        let wb = self.bytes_cache_to_bus_wb();
        StatsReport {
            counts: self.clone(),
            hit_rate: self.hit_rate(),
            bytes_bus_to_cache: bus_to_cache,
            bytes_cache_to_bus_wb: wb,
            bytes_total_traffic: bus_to_cache + wb,
        }
    }

    /// Serializes the report as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.report())
    }

    /// Prints a formatted summary of the statistics.
    pub fn print(&self) {
        let r = self.report();

        println!("\n==========================================================");
        println!("CACHE SIMULATION STATISTICS");
        println!("==========================================================");
        println!("cpu_accesses             {}", self.cpu_accesses);
        println!("  loads                  {}", self.loads);
        println!("  stores                 {}", self.stores);
        println!("hits                     {}", self.hits);
        println!("misses                   {}", self.misses);
        println!("hit_rate                 {:.2}%", r.hit_rate * 100.0);
        println!("upgrade_misses           {}", self.upgrade_misses);
        println!("writebacks               {}", self.writebacks);
        println!("----------------------------------------------------------");
        println!("SNOOP EVENTS");
        println!("  snoop.hits             {}", self.snoop_hits);
        println!("  snoop.misses           {}", self.snoop_misses);
        println!("----------------------------------------------------------");
        println!("BUS TRAFFIC");
        println!("  B_bus_to_cache         {}", r.bytes_bus_to_cache);
        println!("  B_cache_to_bus_wb      {}", r.bytes_cache_to_bus_wb);
        println!("  B_total_traffic        {}", r.bytes_total_traffic);
        println!("==========================================================");
    }
}

impl StatsSink for CacheStats {
    fn record(&mut self, outcome: &AccessOutcome) {
        match outcome.action {
            Action::Load => self.loads += 1,
            Action::Store => self.stores += 1,
            Action::LoadMiss | Action::StoreMiss => {}
        }

        if outcome.action.is_local() {
            self.cpu_accesses += 1;
            if outcome.hit {
                self.hits += 1;
            } else {
                self.misses += 1;
            }
        } else if outcome.hit {
            self.snoop_hits += 1;
        } else {
            self.snoop_misses += 1;
        }

        if outcome.writeback {
            self.writebacks += 1;
        }
        if outcome.upgrade_miss {
            self.upgrade_misses += 1;
        }
    }
}
