//! Integration tests for trace parsing.

use cachesim::common::{Action, TraceError, TraceErrorKind};
use cachesim::sim::trace::{parse_line, parse_trace, TraceEvent};

/// Tests every accepted op spelling.
#[test]
fn test_op_spellings() {
    let cases = [
        ("0", Action::Load),
        ("L", Action::Load),
        ("load", Action::Load),
        ("1", Action::Store),
        ("s", Action::Store),
        ("STORE", Action::Store),
        ("2", Action::LoadMiss),
        ("LM", Action::LoadMiss),
        ("ld_miss", Action::LoadMiss),
        ("3", Action::StoreMiss),
        ("sm", Action::StoreMiss),
        ("st_miss", Action::StoreMiss),
    ];

    for (op, action) in cases {
        assert_eq!(op.parse::<Action>(), Ok(action), "op {}", op);
    }
}

/// Tests that numeric op codes round-trip through `Action::code`.
#[test]
fn test_op_codes() {
    for action in Action::ALL {
        assert_eq!(action.code().to_string().parse::<Action>(), Ok(action));
    }
}

/// Tests address formats.
#[test]
fn test_address_formats() {
    assert_eq!(
        parse_line(1, "0 0x1000").unwrap(),
        Some(TraceEvent::new(Action::Load, 0x1000))
    );
    assert_eq!(
        parse_line(1, "1 DEADBEEF").unwrap(),
        Some(TraceEvent::new(Action::Store, 0xDEAD_BEEF))
    );
    assert_eq!(
        parse_line(1, "  2\t0XFFFFFFFF  ").unwrap(),
        Some(TraceEvent::new(Action::LoadMiss, u32::MAX))
    );
}

/// Tests blank and comment lines.
#[test]
fn test_comments_and_blanks() {
    assert_eq!(parse_line(1, "").unwrap(), None);
    assert_eq!(parse_line(1, "   ").unwrap(), None);
    assert_eq!(parse_line(1, "# header").unwrap(), None);
    assert_eq!(
        parse_line(1, "3 0x40 # trailing").unwrap(),
        Some(TraceEvent::new(Action::StoreMiss, 0x40))
    );
}

/// Tests parsing a whole trace.
#[test]
fn test_parse_trace() {
    let text = "# demo\n0 0x1000\n\n1 0x1000\nSM 0x1000\n";
    let events = parse_trace(text).unwrap();

    assert_eq!(
        events,
        vec![
            TraceEvent::new(Action::Load, 0x1000),
            TraceEvent::new(Action::Store, 0x1000),
            TraceEvent::new(Action::StoreMiss, 0x1000),
        ]
    );
}

/// Tests error reporting with line numbers.
#[test]
fn test_trace_errors() {
    let err = parse_trace("0 0x10\n9 0x20\n").unwrap_err();
    assert_eq!(
        err,
        TraceError::new(2, TraceErrorKind::UnknownOp("9".to_string()))
    );

    let err = parse_trace("0 0x10\n\n1 zz\n").unwrap_err();
    assert_eq!(err.line, 3);
    assert_eq!(err.kind, TraceErrorKind::BadAddress("zz".to_string()));

    let err = parse_line(7, "0 0x10 extra").unwrap_err();
    assert_eq!(err, TraceError::new(7, TraceErrorKind::FieldCount(3)));

    let err = parse_line(1, "load").unwrap_err();
    assert_eq!(err.kind, TraceErrorKind::FieldCount(1));
}

/// Tests rejection of addresses wider than 32 bits.
#[test]
fn test_address_out_of_range() {
    let err = parse_line(4, "0 0x100000000").unwrap_err();
    assert_eq!(
        err,
        TraceError::new(4, TraceErrorKind::AddressOutOfRange(0x1_0000_0000))
    );
}

/// Tests trace error display formatting.
#[test]
fn test_trace_error_display() {
    let err = parse_line(12, "x 0x10").unwrap_err();
    let s = format!("{}", err);
    assert!(s.contains("line 12"));
    assert!(s.contains("unknown op 'x'"));
}
