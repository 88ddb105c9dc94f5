//! Failures moving report text in and out of the process.

/// A report file or stdin could not be read.
///
/// The message names the input, `stdin` or a path, followed by the OS error.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("IO Error: {} at line {} in {}", message, line, file)]
pub struct IoError {
    /// The input name and the OS error text
    pub message: String,
    /// Line in causeway where the failure was detected
    pub line: u32,
    /// Source file in causeway where the failure was detected
    pub file: &'static str,
}

impl IoError {
    /// Records an input failure at the caller's location.
    ///
    /// # Examples
    ///
    /// ```
    /// use causeway_error::IoError;
    ///
    /// let err = IoError::new("report.json: No such file or directory");
    /// assert!(err.message.contains("No such file"));
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
