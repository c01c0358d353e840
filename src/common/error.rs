//! Error Types.
//!
//! Configuration problems are rejected when a cache is constructed, and
//! malformed trace lines are rejected by the reader. Cache accesses themselves
//! never fail.

use std::fmt;

/// Invalid cache geometry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A size parameter was zero.
    Zero(&'static str),

    /// A parameter that must be a power of two was not.
    NotPowerOfTwo {
        /// Name of the offending parameter.
        what: &'static str,
        /// Value supplied or derived.
        value: u64,
    },

    /// Capacity is not a whole number of sets.
    UnevenCapacity {
        /// Total capacity in bytes.
        capacity: u64,
        /// Bytes per set (`block_size * associativity`).
        set_bytes: u64,
    },

    /// Offset and index fields do not fit in a 32-bit address.
    AddressTooWide {
        /// Bits needed for the block offset.
        offset_bits: u32,
        /// Bits needed for the set index.
        index_bits: u32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Zero(what) => write!(f, "Zero({})", what),
            ConfigError::NotPowerOfTwo { what, value } => {
                write!(f, "NotPowerOfTwo({} = {})", what, value)
            }
            ConfigError::UnevenCapacity {
                capacity,
                set_bytes,
            } => write!(
                f,
                "UnevenCapacity({} bytes is not a multiple of {} bytes per set)",
                capacity, set_bytes
            ),
            ConfigError::AddressTooWide {
                offset_bits,
                index_bits,
            } => write!(
                f,
                "AddressTooWide({} offset + {} index bits > 32)",
                offset_bits, index_bits
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

/// What went wrong on a trace line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TraceErrorKind {
    /// The line did not have exactly two fields.
    FieldCount(usize),
    /// The op field is not a known action.
    UnknownOp(String),
    /// The address field is not hexadecimal.
    BadAddress(String),
    /// The address does not fit in 32 bits.
    AddressOutOfRange(u64),
}

/// Malformed trace line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TraceError {
    /// 1-based line number.
    pub line: usize,
    /// Failure detail.
    pub kind: TraceErrorKind,
}

impl TraceError {
    /// Creates an error for `line`.
    pub fn new(line: usize, kind: TraceErrorKind) -> Self {
        Self { line, kind }
    }
}

impl fmt::Display for TraceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: ", self.line)?;
        match &self.kind {
            TraceErrorKind::FieldCount(n) => write!(f, "expected 2 fields, found {}", n),
            TraceErrorKind::UnknownOp(op) => write!(f, "unknown op '{}'", op),
            TraceErrorKind::BadAddress(s) => write!(f, "bad address '{}'", s),
            TraceErrorKind::AddressOutOfRange(v) => {
                write!(f, "address {:#x} exceeds 32 bits", v)
            }
        }
    }
}

impl std::error::Error for TraceError {}

/// Top-level failure of a simulation run.
#[derive(Debug)]
pub enum SimError {
    /// Reading a config or trace file failed.
    Io {
        /// Path being read.
        path: String,
        /// Underlying error.
        source: std::io::Error,
    },
    /// The configuration file is not valid TOML for [`crate::config::Config`].
    Toml(toml::de::Error),
    /// The cache geometry is invalid.
    Config(ConfigError),
    /// The trace is malformed.
    Trace(TraceError),
    /// The JSON report could not be written.
    Json(serde_json::Error),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::Io { path, source } => write!(f, "could not read '{}': {}", path, source),
            SimError::Toml(e) => write!(f, "bad config: {}", e),
            SimError::Config(e) => write!(f, "bad cache geometry: {}", e),
            SimError::Trace(e) => write!(f, "bad trace: {}", e),
            SimError::Json(e) => write!(f, "could not serialize report: {}", e),
        }
    }
}

impl std::error::Error for SimError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimError::Io { source, .. } => Some(source),
            SimError::Toml(e) => Some(e),
            SimError::Config(e) => Some(e),
            SimError::Trace(e) => Some(e),
            SimError::Json(e) => Some(e),
        }
    }
}

impl From<ConfigError> for SimError {
    fn from(e: ConfigError) -> Self {
        SimError::Config(e)
    }
}

impl From<TraceError> for SimError {
    fn from(e: TraceError) -> Self {
        SimError::Trace(e)
    }
}

impl From<toml::de::Error> for SimError {
    fn from(e: toml::de::Error) -> Self {
        SimError::Toml(e)
    }
}

impl From<serde_json::Error> for SimError {
    fn from(e: serde_json::Error) -> Self {
        SimError::Json(e)
    }
}
