//! Tests for re-rendering recorded reports.

use causeway::{
    CausewayErrorKind, ErrorRecord, FormatStyle, Frame, StructuredFormatter, TracedError,
    read_report, render_report,
};
use std::io::Write;

const REPORT: &str = r#"{
    "message": "process failed",
    "stack": [
        {"function": "app::process", "file": "process.rs", "line": 10},
        {"function": "app::main", "file": "main.rs", "line": 3}
    ],
    "cause": {
        "message": "load failed",
        "stack": [{"function": "app::load", "file": "load.rs", "line": 20}],
        "cause": {"message": "disk full"}
    }
}"#;

#[test]
fn test_render_compact() {
    let text = render_report(REPORT, FormatStyle::Compact, false).unwrap();
    assert_eq!(text, "process failed: load failed: disk full");
}

#[test]
fn test_render_multiline() {
    let text = render_report(REPORT, FormatStyle::Multiline, false).unwrap();
    let expected = "process failed\n\
                    \x20   at app::process (process.rs:10)\n\
                    \x20   at app::main (main.rs:3)\n\
                    Caused by: load failed\n\
                    \x20   at app::load (load.rs:20)\n\
                    Caused by: disk full";
    assert_eq!(text, expected);
}

#[test]
fn test_render_structured_reproduces_report() {
    let text = render_report(REPORT, FormatStyle::Structured, false).unwrap();
    let rendered: serde_json::Value = serde_json::from_str(&text).unwrap();
    let original: serde_json::Value = serde_json::from_str(REPORT).unwrap();
    assert_eq!(rendered, original);
}

#[test]
fn test_render_pretty_is_indented() {
    let text = render_report(REPORT, FormatStyle::Structured, true).unwrap();
    assert!(text.contains("\n  \"message\": \"process failed\""), "{}", text);
}

#[test]
fn test_render_rejects_invalid_json() {
    let err = render_report("{not json", FormatStyle::Compact, false).unwrap_err();
    assert!(matches!(err.kind(), CausewayErrorKind::Json(_)));
}

#[test]
fn test_render_deeply_nested_report() {
    let depth = 300;
    let mut report = String::new();
    for level in 0..depth {
        report.push_str(&format!(r#"{{"message":"level {}","cause":"#, level));
    }
    report.push_str(r#"{"message":"disk full"}"#);
    report.push_str(&"}".repeat(depth));

    let text = render_report(&report, FormatStyle::Compact, false).unwrap();
    assert!(text.starts_with("level 0: level 1: "), "{}", &text[..40]);
    assert!(text.ends_with(&format!("level {}: disk full", depth - 1)));
    assert_eq!(text.matches(": ").count(), depth);
}

#[test]
fn test_read_report_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(REPORT.as_bytes()).unwrap();

    let record = read_report(Some(file.path())).unwrap();
    assert_eq!(record.depth(), 3);
    assert_eq!(record.message, "process failed");
}

#[test]
fn test_read_report_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_report(Some(&dir.path().join("absent.json"))).unwrap_err();
    assert!(matches!(err.kind(), CausewayErrorKind::Io(_)));
}

#[test]
fn test_live_error_survives_round_trip() {
    let inner = TracedError::from_parts(
        "load failed".to_string(),
        None,
        Box::new(causeway::FixedStacktrace::new(vec![Frame::new(
            "app::load",
            "load.rs",
            20,
        )])),
    );
    let outer = TracedError::decorate(inner, "process failed");

    let json = outer
        .render_with(&StructuredFormatter::new())
        .unwrap();
    let record: ErrorRecord = serde_json::from_str(&json).unwrap();
    let replayed = TracedError::from_record(record);

    assert_eq!(replayed.message(), "process failed");
    assert_eq!(
        replayed.render_with(&causeway::CompactFormatter).unwrap(),
        "process failed: load failed"
    );
}
