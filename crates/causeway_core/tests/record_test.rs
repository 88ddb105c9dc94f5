//! Tests for structured records and replay.

use causeway_core::{
    CompactFormatter, ErrorRecord, Frame, Link, MultilineFormatter, RecordedError,
    StructuredFormatter, TracedError, create,
};
use std::io;

#[test]
fn test_record_mirrors_the_chain() {
    let err = TracedError::decorate(
        TracedError::decorate(io::Error::other("disk full"), "write failed"),
        "save failed",
    );

    let record = err.to_record();
    assert_eq!(record.depth(), 3);
    assert_eq!(record.message, "save failed");
    assert_eq!(record.stack.len(), err.stack().len());

    let inner = record.cause.as_ref().unwrap();
    assert_eq!(inner.message, "write failed");

    let terminal = inner.cause.as_ref().unwrap();
    assert_eq!(terminal.message, "disk full");
    assert!(terminal.stack.is_empty());
    assert!(terminal.cause.is_none());
}

#[test]
fn test_structured_output_deserializes_to_same_depth() {
    for depth in 1..=4 {
        let mut err = create("root");
        for level in 1..depth {
            err = TracedError::decorate(err, format!("level {}", level));
        }

        let json = err.render_with(&StructuredFormatter::new()).unwrap();
        let record: ErrorRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record.depth(), depth);
        assert_eq!(record, err.to_record());
    }
}

#[test]
fn test_from_record_replays_frames() {
    let record = ErrorRecord {
        message: "process failed".to_string(),
        stack: vec![
            Frame::new("myapp::my_function", "file.rs", 123),
            Frame::new("myapp::main", "main.rs", 45),
        ],
        cause: Some(Box::new(ErrorRecord {
            message: "something went wrong".to_string(),
            stack: vec![Frame::new("myapp::other_function", "file.rs", 42)],
            cause: None,
        })),
    };

    let err = TracedError::from_record(record.clone());
    assert_eq!(
        err.render_with(&MultilineFormatter).unwrap(),
        "process failed\n    at myapp::my_function (file.rs:123)\n    at myapp::main (main.rs:45)\n\
         Caused by: something went wrong\n    at myapp::other_function (file.rs:42)\n"
    );
    assert_eq!(err.to_record(), record);
}

#[test]
fn test_from_record_restores_foreign_terminal() {
    let record: ErrorRecord = serde_json::from_str(
        r#"{
            "message": "Decorated",
            "stack": [{ "function": "myapp::run", "file": "run.rs", "line": 9 }],
            "cause": { "message": "A plain error" }
        }"#,
    )
    .unwrap();

    let err = TracedError::from_record(record);
    let links: Vec<Link<'_>> = err.chain().collect();
    assert_eq!(links.len(), 2);
    match links[1] {
        Link::Foreign(foreign) => {
            let recorded = foreign.downcast_ref::<RecordedError>().unwrap();
            assert_eq!(recorded.message(), "A plain error");
        }
        Link::Traced(_) => panic!("expected a foreign terminal"),
    }
    assert_eq!(
        err.render_with(&MultilineFormatter).unwrap(),
        "Decorated\n    at myapp::run (run.rs:9)\nCaused by: A plain error"
    );
}

#[test]
fn test_from_record_single_link_stays_traced() {
    let err = TracedError::from_record(ErrorRecord::new("alone"));
    assert_eq!(err.message(), "alone");
    assert!(err.stack().is_empty());
    assert_eq!(err.render_with(&CompactFormatter).unwrap(), "alone");
}

#[test]
fn test_from_json_reads_chains_deeper_than_serde_json_default() {
    let mut err = create("root");
    for level in 1..200 {
        err = TracedError::decorate(err, format!("level {}", level));
    }
    let json = err.render_with(&StructuredFormatter::new()).unwrap();

    assert!(serde_json::from_str::<ErrorRecord>(&json).is_err());

    let record = ErrorRecord::from_json(&json).unwrap();
    assert_eq!(record.depth(), 200);
    assert_eq!(record, err.to_record());
}

#[test]
fn test_from_json_rejects_trailing_input() {
    assert!(ErrorRecord::from_json(r#"{"message":"a"} {"message":"b"}"#).is_err());
    assert!(ErrorRecord::from_json(r#"{"message":"a"}"#).is_ok());
}

#[test]
fn test_missing_message_is_rejected() {
    let result = serde_json::from_str::<ErrorRecord>(r#"{"stack": []}"#);
    assert!(result.is_err());
}
