//! Single-line rendering.

use crate::{ErrorFormatter, chain};
use causeway_error::CausewayResult;
use std::error::Error;

/// Joins link messages with `": "`, outermost first.
///
/// ```text
/// failed to process: something went wrong
/// ```
///
/// # Examples
///
/// ```
/// use causeway_core::{CompactFormatter, TracedError};
///
/// let err = TracedError::decorate(TracedError::new("Y"), "X");
/// assert_eq!(err.render_with(&CompactFormatter).unwrap(), "X: Y");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompactFormatter;

impl ErrorFormatter for CompactFormatter {
    fn format(&self, err: &(dyn Error + 'static)) -> CausewayResult<String> {
        let mut out = String::new();
        for (index, link) in chain(err).enumerate() {
            if index > 0 {
                out.push_str(": ");
            }
            out.push_str(&link.message());
        }
        Ok(out)
    }
}
