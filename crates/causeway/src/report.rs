//! Re-rendering recorded reports.

use causeway_core::{ErrorRecord, FormatStyle, TracedError};
use causeway_error::{CausewayResult, IoError};
use std::io::Read;
use std::path::Path;
use tracing::{debug, instrument};

/// Reads a structured report from `path`, or from stdin when `path` is `None`.
///
/// # Errors
///
/// Returns an error if the input cannot be read or is not a report.
#[instrument]
pub fn read_report(path: Option<&Path>) -> CausewayResult<ErrorRecord> {
    let text = match path {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| IoError::new(format!("{}: {}", path.display(), e)))?,
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(|e| IoError::new(format!("stdin: {}", e)))?;
            text
        }
    };
    debug!(bytes = text.len(), "Read report");

    ErrorRecord::from_json(&text)
}

/// Renders a structured report in `style`.
///
/// # Examples
///
/// ```
/// use causeway::{FormatStyle, render_report};
///
/// let report = r#"{"message":"process failed","cause":{"message":"disk full"}}"#;
/// let text = render_report(report, FormatStyle::Compact, false).unwrap();
/// assert_eq!(text, "process failed: disk full");
/// ```
///
/// # Errors
///
/// Returns an error if `report` is not a valid structured report.
pub fn render_report(report: &str, style: FormatStyle, pretty: bool) -> CausewayResult<String> {
    let record = ErrorRecord::from_json(report)?;
    let err = TracedError::from_record(record);
    debug!(%style, links = err.chain().count(), "Rendering report");
    err.render_with(style.formatter(pretty).as_ref())
}
