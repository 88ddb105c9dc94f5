//! Failures while loading `causeway.toml` and `CAUSEWAY_*` settings.

/// A configuration source could not be read, or held a value causeway does
/// not understand, such as an unknown format style.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", message, line, file)]
pub struct ConfigError {
    /// What was wrong with the configuration
    pub message: String,
    /// Line in causeway where the failure was detected
    pub line: u32,
    /// Source file in causeway where the failure was detected
    pub file: &'static str,
}

impl ConfigError {
    /// Records a configuration failure at the caller's location.
    ///
    /// # Examples
    ///
    /// ```
    /// use causeway_error::ConfigError;
    ///
    /// let err = ConfigError::new("unknown format style");
    /// assert!(err.message.contains("format style"));
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
