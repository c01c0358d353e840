//! Cache Coherence Simulator CLI.
//!
//! The main executable for the simulator. It parses command-line arguments,
//! loads the TOML configuration, replays one trace file through the
//! configured cache, and prints the statistics report.
//!
//! # Usage
//!
//! ```text
//! cachesim --trace traces/sample.trace --protocol msi --assoc 2
//! ```
//!
//! Log output is controlled with the `CACHESIM_LOG` environment variable
//! (e.g. `CACHESIM_LOG=trace` together with `--trace-accesses`).

use clap::Parser;
use env_logger::Env;
use std::{fs, process};

extern crate cachesim;

use cachesim::common::SimError;
use cachesim::config::{Config, ReportFormat, Replacement};
use cachesim::core::cache::protocol::CoherenceProtocol;
use cachesim::sim::{self, load_trace};

const DEFAULT_CONFIG: &str = "configs/default.toml";

/// Command-line arguments for the cache simulator.
///
/// Geometry and protocol flags override the values from the configuration
/// file.
#[derive(Parser, Debug)]
#[command(author, version, about = "Trace-driven cache coherence simulator")]
struct Args {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<String>,

    /// Trace file to replay.
    #[arg(short, long)]
    trace: String,

    /// Total capacity in bytes.
    #[arg(long)]
    capacity: Option<usize>,

    /// Block size in bytes.
    #[arg(long)]
    block_size: Option<usize>,

    /// Ways per set.
    #[arg(long)]
    assoc: Option<usize>,

    /// Coherence protocol (none, msi).
    #[arg(long, value_parser = parse_protocol)]
    protocol: Option<CoherenceProtocol>,

    /// Replacement policy (clock, next-way, lru).
    #[arg(long, value_parser = parse_replacement)]
    replacement: Option<Replacement>,

    /// Make a snoop-invalidated line the next victim of its set.
    #[arg(long)]
    invalidate_resets_victim: bool,

    /// Print the report as JSON.
    #[arg(long)]
    json: bool,

    /// Log the set and way of every access (needs CACHESIM_LOG=trace).
    #[arg(long)]
    trace_accesses: bool,
}

fn parse_protocol(s: &str) -> Result<CoherenceProtocol, String> {
    match s.to_ascii_lowercase().as_str() {
        "none" => Ok(CoherenceProtocol::None),
        "msi" => Ok(CoherenceProtocol::Msi),
        other => Err(format!("unknown protocol '{}'", other)),
    }
}

fn parse_replacement(s: &str) -> Result<Replacement, String> {
    match s.to_ascii_lowercase().as_str() {
        "clock" => Ok(Replacement::Clock),
        "next-way" | "next_way" => Ok(Replacement::NextWay),
        "lru" => Ok(Replacement::Lru),
        other => Err(format!("unknown replacement policy '{}'", other)),
    }
}

/// Loads the configuration file.
///
/// An explicit `--config` must exist. Without one, the default path is used
/// if present and built-in defaults otherwise.
fn load_config(path: Option<&str>) -> Result<Config, SimError> {
    let (path, required) = match path {
        Some(p) => (p, true),
        None => (DEFAULT_CONFIG, false),
    };
    match fs::read_to_string(path) {
        Ok(text) => Ok(Config::from_toml(&text)?),
        Err(e) if !required && e.kind() == std::io::ErrorKind::NotFound => {
            log::debug!("no config at {}, using defaults", path);
            Ok(Config::default())
        }
        Err(source) => Err(SimError::Io {
            path: path.to_string(),
            source,
        }),
    }
}

fn apply_overrides(config: &mut Config, args: &Args) {
    let cache = &mut config.cache;
    if let Some(capacity) = args.capacity {
        cache.capacity = capacity;
    }
    if let Some(block_size) = args.block_size {
        cache.block_size = block_size;
    }
    if let Some(assoc) = args.assoc {
        cache.associativity = assoc;
    }
    if let Some(protocol) = args.protocol {
        cache.protocol = protocol;
    }
    if let Some(replacement) = args.replacement {
        cache.replacement = replacement;
    }
    if args.invalidate_resets_victim {
        cache.invalidate_resets_victim = true;
    }
    if args.json {
        config.output.format = ReportFormat::Json;
    }
    if args.trace_accesses {
        config.output.trace_accesses = true;
    }
}

fn run(args: &Args) -> Result<(), SimError> {
    let mut config = load_config(args.config.as_deref())?;
    apply_overrides(&mut config, args);

    let events = load_trace(&args.trace)?;
    let stats = sim::run(&config, &events)?;

    match config.output.format {
        ReportFormat::Text => {
            println!("Cache Configuration");
            println!("--------------------");
            println!("  Capacity:           {} B", config.cache.capacity);
            println!("  Block Size:         {} B", config.cache.block_size);
            println!("  Associativity:      {}", config.cache.associativity);
            println!("  Protocol:           {}", config.cache.protocol);
            println!("  Replacement:        {}", config.cache.replacement);
            println!("  Trace:              {}", args.trace);
            stats.print();
        }
        ReportFormat::Json => println!("{}", stats.to_json()?),
    }
    Ok(())
}

/// Main entry point for the cache simulator.
///
/// # Behavior
///
/// 1. **Logging**: Initializes `env_logger` from `CACHESIM_LOG` (default `warn`).
/// 2. **Configuration**: Parses arguments, loads the TOML file, applies overrides.
/// 3. **Replay**: Parses the trace and feeds every event through the cache.
/// 4. **Report**: Prints the statistics as text or JSON.
///
/// Any failure is printed to stderr and the process exits with status 1.
fn main() {
    let env = Env::default()
        .filter_or("CACHESIM_LOG", "warn")
        .write_style_or("CACHESIM_LOG_STYLE", "auto");
    env_logger::init_from_env(env);

    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("\n[!] FATAL: {}", e);
        process::exit(1);
    }
}
