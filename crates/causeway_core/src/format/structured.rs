//! JSON rendering.

use crate::{ErrorFormatter, ErrorRecord};
use causeway_error::{CausewayResult, JsonError};
use std::error::Error;

/// Renders the chain as a nested [`ErrorRecord`].
///
/// ```json
/// {
///   "message": "failed to process",
///   "stack": [
///     { "function": "myapp::my_function", "file": "src/file.rs", "line": 123 }
///   ],
///   "cause": {
///     "message": "something went wrong"
///   }
/// }
/// ```
///
/// `stack` is omitted when empty and `cause` when there is no further link.
///
/// # Examples
///
/// ```
/// use causeway_core::{StructuredFormatter, TracedError};
///
/// let io = std::io::Error::other("disk full");
/// let err = TracedError::wrap(io);
/// let json: serde_json::Value =
///     serde_json::from_str(&err.render_with(&StructuredFormatter::new()).unwrap()).unwrap();
/// assert_eq!(json["message"], "disk full");
/// assert!(json.get("cause").is_none());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StructuredFormatter {
    pretty: bool,
}

impl StructuredFormatter {
    /// Compact JSON on a single line.
    pub fn new() -> Self {
        Self { pretty: false }
    }

    /// Indented JSON.
    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    /// True when output is indented.
    pub fn is_pretty(&self) -> bool {
        self.pretty
    }
}

impl ErrorFormatter for StructuredFormatter {
    fn format(&self, err: &(dyn Error + 'static)) -> CausewayResult<String> {
        let record = ErrorRecord::from_error(err);
        let rendered = if self.pretty {
            serde_json::to_string_pretty(&record)
        } else {
            serde_json::to_string(&record)
        };
        Ok(rendered.map_err(JsonError::from)?)
    }
}
