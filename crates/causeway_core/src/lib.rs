//! Stack-capturing error values for the causeway library.
//!
//! A [`TracedError`] wraps a failure with a message, an optional cause and the
//! call stack of the place that built it. Chains of them can be rendered with
//! any [`ErrorFormatter`] and searched with [`is`].
//!
//! # Constructors
//!
//! - [`create`] / [`TracedError::new`] - a fresh error
//! - [`wrap`] / [`TracedError::wrap`] - ensure an error is traced, keeping an existing stack
//! - [`decorate`] / [`TracedError::decorate`] - add a message link on top of an error
//! - [`decorate_fmt`] / [`decoratef!`] - the same with a formatted message
//!
//! The optional forms pass `None` straight through, so callers can wrap
//! unconditionally.
//!
//! # Examples
//!
//! ```
//! use causeway_core::{CompactFormatter, TracedError, decorate, is};
//!
//! let root = TracedError::new("something went wrong");
//! let err = decorate(Some(root), "process failed").unwrap();
//!
//! assert_eq!(
//!     err.render_with(&CompactFormatter).unwrap(),
//!     "process failed: something went wrong"
//! );
//! assert!(err.is(&TracedError::new("something went wrong")));
//! ```
//!
//! # Testing
//!
//! Install a capture strategy returning a [`FixedStacktrace`] to get
//! deterministic frames:
//!
//! ```standalone_crate
//! use causeway_core::{FixedStacktrace, Frame, Settings, Stacktrace, TracedError};
//!
//! let _guard = Settings::set_capture(|_skip: usize| -> Box<dyn Stacktrace> {
//!     Box::new(FixedStacktrace::new(vec![Frame::new("app::run", "run.rs", 7)]))
//! });
//!
//! let err = TracedError::new("boom");
//! assert_eq!(err.to_string(), "boom\n    at app::run (run.rs:7)\n");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod chain;
mod config;
mod format;
mod frame;
mod matching;
mod record;
mod settings;
pub mod stacktrace;
mod traced;

pub use chain::{Chain, Link, chain};
pub use config::CausewayConfig;
pub use format::{
    CompactFormatter, ErrorFormatter, FormatStyle, MultilineFormatter, StructuredFormatter,
};
pub use frame::Frame;
pub use matching::is;
pub use record::{ErrorRecord, RecordedError};
pub use settings::{Settings, SettingsGuard};
pub use stacktrace::{
    CaptureStrategy, FixedStacktrace, RuntimeCapture, RuntimeStacktrace, Stacktrace, capture,
};
pub use traced::{
    BoxError, Cause, ResultExt, TracedError, create, decorate, decorate_fmt, wrap,
};
