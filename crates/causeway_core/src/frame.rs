//! Call-site records.

use serde::{Deserialize, Serialize};

/// One captured call site.
///
/// # Examples
///
/// ```
/// use causeway_core::Frame;
///
/// let frame = Frame::new("myapp::load", "src/load.rs", 42);
/// assert_eq!(frame.function(), "myapp::load");
/// assert_eq!(*frame.line(), 42);
/// assert_eq!(frame.to_string(), "myapp::load (src/load.rs:42)");
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_more::Display,
)]
#[display("{} ({}:{})", function, file, line)]
pub struct Frame {
    /// Fully qualified function name
    function: String,
    /// Source file path
    file: String,
    /// Line number, `0` when unknown
    line: u32,
}

impl Frame {
    /// Placeholder used when debug info has no name or file for a frame.
    pub const UNKNOWN: &'static str = "<unknown>";

    /// Creates a frame.
    pub fn new(function: impl Into<String>, file: impl Into<String>, line: u32) -> Self {
        Self {
            function: function.into(),
            file: file.into(),
            line,
        }
    }
}
