//! Top-level error wrapper types.

use crate::{ConfigError, IoError, JsonError};

/// Every failure family the library can report.
///
/// # Examples
///
/// ```
/// use causeway_error::{CausewayError, JsonError};
///
/// let err: CausewayError = JsonError::new("trailing characters").into();
/// assert!(format!("{}", err).contains("JSON Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum CausewayErrorKind {
    /// Structured report serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Report input/output error
    #[from(IoError)]
    Io(IoError),
}

/// Causeway error with kind discrimination.
///
/// # Examples
///
/// ```
/// use causeway_error::{CausewayErrorKind, CausewayResult, ConfigError};
///
/// fn might_fail() -> CausewayResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// let err = might_fail().unwrap_err();
/// assert!(matches!(err.kind(), CausewayErrorKind::Config(_)));
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Causeway Error: {}", _0)]
pub struct CausewayError(Box<CausewayErrorKind>);

impl CausewayError {
    /// Create a new error from a kind.
    pub fn new(kind: CausewayErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &CausewayErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to CausewayErrorKind
impl<T> From<T> for CausewayError
where
    T: Into<CausewayErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for causeway operations.
pub type CausewayResult<T> = std::result::Result<T, CausewayError>;
