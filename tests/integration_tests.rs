//! End-to-end trace replay tests.

use cachesim::common::{Action, SimError};
use cachesim::config::{CacheConfig, Config};
use cachesim::core::cache::protocol::CoherenceProtocol;
use cachesim::core::cache::Cache;
use cachesim::sim::{self, parse_trace, TraceEvent};

fn msi_config() -> Config {
    let mut config = Config::default();
    config.cache.protocol = CoherenceProtocol::Msi;
    config
}

/// Tests replay of the shipped sample trace under MSI.
#[test]
fn test_sample_trace_msi() {
    let events = parse_trace(include_str!("../traces/sample.trace")).unwrap();
    assert_eq!(events.len(), 15);

    let stats = sim::run(&msi_config(), &events).unwrap();

    assert_eq!(stats.cpu_accesses, 11);
    assert_eq!(stats.loads, 5);
    assert_eq!(stats.stores, 6);
    assert_eq!(stats.hits, 2);
    assert_eq!(stats.misses, 9);
    assert_eq!(stats.snoop_hits, 3);
    assert_eq!(stats.snoop_misses, 1);
    assert_eq!(stats.writebacks, 3);
    assert_eq!(stats.upgrade_misses, 1);

    let report = stats.report();
    assert_eq!(report.bytes_bus_to_cache, 9 * 64);
    assert_eq!(report.bytes_cache_to_bus_wb, 3 * 64);
}

/// Tests that `replay` returns the number of hits.
#[test]
fn test_replay_counts_hits() {
    let mut cache = Cache::new(&CacheConfig::default()).unwrap();
    let events = [
        TraceEvent::new(Action::Load, 0x4000),
        TraceEvent::new(Action::Load, 0x4008),
        TraceEvent::new(Action::Store, 0x4010),
        TraceEvent::new(Action::Load, 0x4040),
    ];

    assert_eq!(sim::replay(&mut cache, &events), 2);
    assert_eq!(cache.stats().cpu_accesses, 4);
}

/// Tests that the access-trace flag does not change results.
#[test]
fn test_run_with_access_trace() {
    let events = parse_trace(include_str!("../traces/sample.trace")).unwrap();
    let quiet = sim::run(&msi_config(), &events).unwrap();

    let mut traced = msi_config();
    traced.output.trace_accesses = true;
    let loud = sim::run(&traced, &events).unwrap();

    assert_eq!(quiet, loud);
}

/// Tests that a bad geometry surfaces as an error from `run`.
#[test]
fn test_run_rejects_bad_geometry() {
    let mut config = msi_config();
    config.cache.block_size = 48;

    assert!(sim::run(&config, &[]).is_err());
}

/// Tests a ping-pong sharing pattern between this cache and a remote writer.
#[test]
fn test_msi_ping_pong() {
    let events: Vec<TraceEvent> = (0..10)
        .flat_map(|_| {
            [
                TraceEvent::new(Action::Store, 0x8000),
                TraceEvent::new(Action::StoreMiss, 0x8000),
            ]
        })
        .collect();

    let stats = sim::run(&msi_config(), &events).unwrap();

    assert_eq!(stats.misses, 10);
    assert_eq!(stats.hits, 0);
    assert_eq!(stats.snoop_hits, 10);
    assert_eq!(stats.writebacks, 10);
}

/// Tests that a JSON serialization failure converts into a fatal run error.
#[test]
fn test_json_error_is_sim_error() {
    let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err = SimError::from(err);

    assert!(matches!(err, SimError::Json(_)));
    assert!(err.to_string().starts_with("could not serialize report: "));
    assert!(std::error::Error::source(&err).is_some());
}
