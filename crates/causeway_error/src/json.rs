//! Failures reading or writing structured error reports.

/// A structured report could not be produced or parsed.
///
/// Raised by the structured formatter and when a recorded chain is read back.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("JSON Error: {} at line {} in {}", message, line, file)]
pub struct JsonError {
    /// The serde_json message, including the input position when parsing
    pub message: String,
    /// Line in causeway where the failure was detected
    pub line: u32,
    /// Source file in causeway where the failure was detected
    pub file: &'static str,
}

impl JsonError {
    /// Records a report encoding failure at the caller's location.
    ///
    /// # Examples
    ///
    /// ```
    /// use causeway_error::JsonError;
    ///
    /// let err = JsonError::new("EOF while parsing an object");
    /// assert!(err.message.contains("EOF"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}

impl From<serde_json::Error> for JsonError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        Self::new(err.to_string())
    }
}
