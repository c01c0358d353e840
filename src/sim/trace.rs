//! Trace File Reader.
//!
//! A trace is plain text with one event per line: an op followed by a
//! hexadecimal address, separated by whitespace.
//!
//! ```text
//! # op  address
//! 0     0x1000
//! S     1040
//! ld_miss 0x1000
//! ```
//!
//! Ops may be given as a numeric code (`0`-`3`), a short mnemonic (`L`, `S`,
//! `LM`, `SM`), or a long name (`load`, `store`, `ld_miss`, `st_miss`), in
//! any case. Text after `#` is ignored.

use crate::common::{Action, SimError, TraceError, TraceErrorKind};
use std::fs;
use std::str::FromStr;

/// A single replayable event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TraceEvent {
    pub action: Action,
    pub addr: u32,
}

impl TraceEvent {
    pub fn new(action: Action, addr: u32) -> Self {
        Self { action, addr }
    }
}

impl FromStr for Action {
    type Err = TraceErrorKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "0" | "l" | "load" => Ok(Action::Load),
            "1" | "s" | "store" => Ok(Action::Store),
            "2" | "lm" | "ld_miss" => Ok(Action::LoadMiss),
            "3" | "sm" | "st_miss" => Ok(Action::StoreMiss),
            _ => Err(TraceErrorKind::UnknownOp(s.to_string())),
        }
    }
}

fn parse_addr(s: &str) -> Result<u32, TraceErrorKind> {
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    let value =
        u64::from_str_radix(digits, 16).map_err(|_| TraceErrorKind::BadAddress(s.to_string()))?;
    u32::try_from(value).map_err(|_| TraceErrorKind::AddressOutOfRange(value))
}

/// Parses one trace line.
///
/// Returns `Ok(None)` for blank and comment-only lines.
pub fn parse_line(line_no: usize, text: &str) -> Result<Option<TraceEvent>, TraceError> {
    let body = text.split('#').next().unwrap_or("");
    let fields: Vec<&str> = body.split_whitespace().collect();
    match fields.as_slice() {
        [] => Ok(None),
        [op, addr] => {
            let action = op.parse::<Action>().map_err(|k| TraceError::new(line_no, k))?;
            let addr = parse_addr(addr).map_err(|k| TraceError::new(line_no, k))?;
            Ok(Some(TraceEvent::new(action, addr)))
        }
        other => Err(TraceError::new(
            line_no,
            TraceErrorKind::FieldCount(other.len()),
        )),
    }
}

/// Parses a complete trace, stopping at the first malformed line.
pub fn parse_trace(text: &str) -> Result<Vec<TraceEvent>, TraceError> {
    let mut events = Vec::new();
    for (i, line) in text.lines().enumerate() {
        if let Some(event) = parse_line(i + 1, line)? {
            events.push(event);
        }
    }
    Ok(events)
}

/// Reads and parses the trace file at `path`.
pub fn load_trace(path: &str) -> Result<Vec<TraceEvent>, SimError> {
    let text = fs::read_to_string(path).map_err(|source| SimError::Io {
        path: path.to_string(),
        source,
    })?;
    Ok(parse_trace(&text)?)
}
