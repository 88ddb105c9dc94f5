//! causeway - errors that remember where they came from.
//!
//! causeway wraps failures in a [`TracedError`] carrying a message, an
//! optional cause and the call stack of the place that built it. Chains are
//! rendered by pluggable formatters and searched with [`is`].
//!
//! # Quick Start
//!
//! ```
//! use causeway::{CompactFormatter, ResultExt, TracedError};
//!
//! fn read_settings() -> Result<String, TracedError> {
//!     std::fs::read_to_string("/definitely/not/here.toml").decorate("reading settings")
//! }
//!
//! let err = read_settings().unwrap_err();
//! assert!(err.render_with(&CompactFormatter).unwrap().starts_with("reading settings: "));
//! assert!(!err.is(&TracedError::new("reading")));
//! ```
//!
//! # Architecture
//!
//! - `causeway_error` - error types of the library itself
//! - `causeway_core` - stack capture, [`TracedError`], matching, formatters, configuration
//!
//! This crate re-exports both and ships the `causeway` binary, which renders
//! recorded reports in any style.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod report;

pub use causeway_core::*;
pub use causeway_error::{
    CausewayError, CausewayErrorKind, CausewayResult, ConfigError, IoError, JsonError,
};
pub use report::{read_report, render_report};
