//! Tests for error construction.

use causeway_core::{
    Cause, Link, ResultExt, Stacktrace, TracedError, create, decorate, decorate_fmt, decoratef,
    traced, wrap,
};
use std::error::Error;
use std::io;

#[test]
fn test_wrap_should_not_wrap_none() {
    assert!(wrap(None::<io::Error>).is_none());
    assert!(wrap(None::<TracedError>).is_none());
}

#[test]
fn test_decorate_should_not_decorate_none() {
    assert!(decorate(None::<io::Error>, "message").is_none());
    assert!(decorate_fmt(None::<TracedError>, format_args!("{}", "message")).is_none());
    assert!(decoratef!(None::<io::Error>, "{} {}", "formatted", "message").is_none());
}

#[test]
fn test_some_is_never_none() {
    assert!(wrap(Some(io::Error::other("reset"))).is_some());
    assert!(wrap(Some(create("created"))).is_some());
    assert!(decorate(Some(io::Error::other("reset")), "decorated").is_some());
    assert!(decoratef!(Some(create("created")), "attempt {}", 2).is_some());
}

#[test]
fn test_create_has_no_cause() {
    let err = create("something went wrong");
    assert_eq!(err.message(), "something went wrong");
    assert!(err.wrapped().is_none());
    assert!(err.cause().is_none());
    assert!(err.source().is_none());
    assert!(!err.stack().is_empty());
}

#[test]
fn test_wrap_foreign_uses_its_text() {
    let err = TracedError::wrap(io::Error::other("A wrapped plain error"));
    assert_eq!(err.message(), "A wrapped plain error");
    assert!(err.wrapped().is_none());
    assert!(!err.stack().is_empty());

    let from_str = TracedError::wrap("plain text");
    assert_eq!(from_str.message(), "plain text");
}

#[test]
fn test_wrap_traced_returns_it_unchanged() {
    let original = TracedError::decorate(io::Error::other("root"), "original");
    let frames = original.stack().frames().to_vec();

    let rewrapped = TracedError::wrap(original);
    assert_eq!(rewrapped.message(), "original");
    assert_eq!(rewrapped.stack().frames(), frames.as_slice());
    assert!(matches!(rewrapped.cause(), Some(Cause::Foreign(_))));

    let again = wrap(Some(rewrapped)).unwrap();
    assert_eq!(again.stack().frames(), frames.as_slice());
}

#[test]
fn test_decorate_always_adds_a_link() {
    let root = create("A traced error");
    let decorated = TracedError::decorate(root, "Decorated");

    assert_eq!(decorated.message(), "Decorated");
    match decorated.cause() {
        Some(Cause::Traced(inner)) => assert_eq!(inner.message(), "A traced error"),
        other => panic!("expected traced cause, got {:?}", other),
    }

    let foreign = TracedError::decorate(io::Error::other("A plain error"), "Decorated");
    match foreign.cause() {
        Some(Cause::Foreign(inner)) => assert_eq!(inner.to_string(), "A plain error"),
        other => panic!("expected foreign cause, got {:?}", other),
    }
}

#[test]
fn test_decoratef_interpolates() {
    let err = decoratef!(
        Some(TracedError::decorate(io::Error::other("A plain error"), "Decorated")),
        "A {} level of decoration",
        "second"
    )
    .unwrap();

    let messages: Vec<String> = err.chain().map(|link| link.message().into_owned()).collect();
    assert_eq!(
        messages,
        vec!["A second level of decoration", "Decorated", "A plain error"]
    );
}

#[test]
fn test_traced_macro_formats_message() {
    let err = traced!("table not found '{}'", "test");
    assert_eq!(err.message(), "table not found 'test'");
    assert!(err.wrapped().is_none());
}

#[test]
fn test_source_follows_the_chain() {
    let err = TracedError::decorate(
        TracedError::decorate(io::Error::other("disk full"), "write failed"),
        "save failed",
    );

    let mut messages = Vec::new();
    let mut current: Option<&(dyn Error + 'static)> = Some(&err);
    while let Some(e) = current {
        match Link::classify(e) {
            Link::Traced(traced) => messages.push(traced.message().to_string()),
            Link::Foreign(foreign) => messages.push(foreign.to_string()),
        }
        current = e.source();
    }
    assert_eq!(messages, vec!["save failed", "write failed", "disk full"]);
}

#[test]
fn test_into_cause_hands_over_the_next_link() {
    let err = TracedError::decorate(create("inner"), "outer");
    match err.into_cause() {
        Some(Cause::Traced(inner)) => assert_eq!(inner.message(), "inner"),
        other => panic!("expected traced cause, got {:?}", other),
    }
}

#[test]
fn test_result_ext() {
    let ok: Result<u8, io::Error> = Ok(7);
    assert_eq!(ok.decorate("unused").unwrap(), 7);

    let failed: Result<u8, io::Error> = Err(io::Error::other("permission denied"));
    let err = failed.decorate_with(|| format!("loading {}", "settings")).unwrap_err();
    assert_eq!(err.message(), "loading settings");
    assert_eq!(err.wrapped().unwrap().to_string(), "permission denied");

    let traced: Result<(), TracedError> = Err(create("kept"));
    let err = traced.traced().unwrap_err();
    assert_eq!(err.message(), "kept");
    assert!(err.wrapped().is_none());

    let foreign: Result<(), io::Error> = Err(io::Error::other("converted"));
    assert_eq!(foreign.traced().unwrap_err().message(), "converted");
}

#[test]
fn test_traced_error_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync + 'static>() {}
    assert_send_sync::<TracedError>();

    let err = create("shared");
    let handle = std::thread::spawn(move || err.message().to_string());
    assert_eq!(handle.join().unwrap(), "shared");
}
