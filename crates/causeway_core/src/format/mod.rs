//! Rendering error chains as text.
//!
//! Every formatter walks the chain with [`chain`](crate::chain), so each one
//! sees the same links in the same order. The library provides:
//! - [`CompactFormatter`]: `outer: inner: root`
//! - [`MultilineFormatter`]: one message per link with its frames
//! - [`StructuredFormatter`]: a nested JSON record

mod compact;
mod multiline;
mod structured;

pub use compact::CompactFormatter;
pub use multiline::MultilineFormatter;
pub use structured::StructuredFormatter;

use causeway_error::CausewayResult;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::sync::Arc;
use strum::VariantNames;

/// Renders an error chain as a string.
///
/// Implement this trait to create a custom formatter. Formatters hold no
/// per-call state, so one instance can be shared across threads.
///
/// # Examples
///
/// ```
/// use causeway_core::{ErrorFormatter, TracedError, chain};
/// use causeway_error::CausewayResult;
/// use std::error::Error;
///
/// struct Innermost;
///
/// impl ErrorFormatter for Innermost {
///     fn format(&self, err: &(dyn Error + 'static)) -> CausewayResult<String> {
///         Ok(chain(err).last().map(|link| link.message().into_owned()).unwrap_or_default())
///     }
/// }
///
/// let err = TracedError::decorate(TracedError::new("no such table"), "query failed");
/// assert_eq!(err.render_with(&Innermost).unwrap(), "no such table");
/// ```
pub trait ErrorFormatter: Send + Sync {
    /// Renders `err` and everything it wraps.
    ///
    /// # Errors
    ///
    /// Returns an error only when the output format itself cannot be
    /// produced, such as a serialization failure.
    fn format(&self, err: &(dyn Error + 'static)) -> CausewayResult<String>;
}

/// The built-in formatter families, selectable from configuration.
///
/// Names are matched ignoring ASCII case, both on the command line and in
/// configuration sources.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    strum::Display,
    strum::EnumString,
    strum::VariantNames,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum FormatStyle {
    /// Single line, messages joined by `": "`.
    Compact,
    /// Exception style with frames and `Caused by: ` links.
    #[default]
    Multiline,
    /// Nested JSON record.
    Structured,
}

impl FormatStyle {
    /// The formatter for this style.
    ///
    /// `pretty` only affects [`FormatStyle::Structured`].
    pub fn formatter(self, pretty: bool) -> Arc<dyn ErrorFormatter> {
        match self {
            FormatStyle::Compact => Arc::new(CompactFormatter),
            FormatStyle::Multiline => Arc::new(MultilineFormatter),
            FormatStyle::Structured if pretty => Arc::new(StructuredFormatter::pretty()),
            FormatStyle::Structured => Arc::new(StructuredFormatter::new()),
        }
    }
}

impl<'de> Deserialize<'de> for FormatStyle {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse()
            .map_err(|_| <D::Error as de::Error>::unknown_variant(&name, FormatStyle::VARIANTS))
    }
}
