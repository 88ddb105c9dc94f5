//! The structured form of an error chain.

use crate::{Frame, Link, chain};
use causeway_error::{CausewayResult, JsonError};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::error::Error;
use std::fmt;

/// Remaining stack below which nested records grow a new stack segment.
const RED_ZONE: usize = 64 * 1024;

/// Size of each stack segment allocated for nested records.
const STACK_SEGMENT: usize = 1024 * 1024;

/// One link of a chain as plain data.
///
/// This is the schema produced by [`StructuredFormatter`](crate::StructuredFormatter):
/// `message` is always present, `stack` is omitted when empty and `cause`
/// when there is no further link.
///
/// Records of any depth can be built, compared, cloned, serialized and
/// dropped. Reading one back with plain `serde_json::from_str` stops at
/// serde_json's nesting limit of 128; use [`ErrorRecord::from_json`] for
/// deeper chains.
///
/// # Examples
///
/// ```
/// use causeway_core::ErrorRecord;
///
/// let record = ErrorRecord::from_json(
///     r#"{"message":"process failed","cause":{"message":"disk full"}}"#,
/// ).unwrap();
/// assert_eq!(record.depth(), 2);
/// ```
#[derive(Serialize, Deserialize)]
pub struct ErrorRecord {
    /// This link's own message.
    pub message: String,
    /// Frames captured for this link, innermost first.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stack: Vec<Frame>,
    /// The next link down the chain.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_cause",
        deserialize_with = "deserialize_cause"
    )]
    pub cause: Option<Box<ErrorRecord>>,
}

impl ErrorRecord {
    /// A record with a message and nothing else.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            stack: Vec::new(),
            cause: None,
        }
    }

    /// Builds the record for a whole chain.
    pub fn from_error(err: &(dyn Error + 'static)) -> Self {
        Self::nest(chain(err).map(|link| match link {
            Link::Traced(traced) => (
                traced.message().to_string(),
                traced.stack().frames().to_vec(),
            ),
            Link::Foreign(foreign) => (foreign.to_string(), Vec::new()),
        }))
    }

    /// Parses a structured report of any depth.
    ///
    /// # Errors
    ///
    /// Returns an error if `text` is not a single valid record.
    pub fn from_json(text: &str) -> CausewayResult<Self> {
        let mut deserializer = serde_json::Deserializer::from_str(text);
        deserializer.disable_recursion_limit();
        let record = Self::deserialize(&mut deserializer).map_err(JsonError::from)?;
        deserializer.end().map_err(JsonError::from)?;
        Ok(record)
    }

    /// Walks this record and its causes, outermost first.
    pub fn links(&self) -> impl Iterator<Item = &ErrorRecord> {
        std::iter::successors(Some(self), |record| record.cause.as_deref())
    }

    /// Number of links, this one included.
    pub fn depth(&self) -> usize {
        self.links().count()
    }

    /// Nests `(message, stack)` pairs given outermost first.
    fn nest(links: impl Iterator<Item = (String, Vec<Frame>)>) -> Self {
        let mut links: Vec<(String, Vec<Frame>)> = links.collect();
        let (message, stack) = links.pop().unwrap_or_default();
        let mut record = ErrorRecord {
            message,
            stack,
            cause: None,
        };
        while let Some((message, stack)) = links.pop() {
            record = ErrorRecord {
                message,
                stack,
                cause: Some(Box::new(record)),
            };
        }
        record
    }
}

impl Clone for ErrorRecord {
    fn clone(&self) -> Self {
        Self::nest(
            self.links()
                .map(|record| (record.message.clone(), record.stack.clone())),
        )
    }
}

impl PartialEq for ErrorRecord {
    fn eq(&self, other: &Self) -> bool {
        self.links()
            .map(|record| (&record.message, &record.stack))
            .eq(other.links().map(|record| (&record.message, &record.stack)))
    }
}

impl Eq for ErrorRecord {}

impl fmt::Debug for ErrorRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let causes: Vec<&str> = self
            .links()
            .skip(1)
            .map(|record| record.message.as_str())
            .collect();
        f.debug_struct("ErrorRecord")
            .field("message", &self.message)
            .field("stack", &self.stack)
            .field("causes", &causes)
            .finish()
    }
}

impl Drop for ErrorRecord {
    fn drop(&mut self) {
        let mut next = self.cause.take();
        while let Some(mut record) = next {
            next = record.cause.take();
        }
    }
}

fn serialize_cause<S: Serializer>(
    cause: &Option<Box<ErrorRecord>>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    stacker::maybe_grow(RED_ZONE, STACK_SEGMENT, || cause.serialize(serializer))
}

fn deserialize_cause<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Box<ErrorRecord>>, D::Error> {
    stacker::maybe_grow(RED_ZONE, STACK_SEGMENT, || {
        Option::<Box<ErrorRecord>>::deserialize(deserializer)
    })
}

/// A foreign error read back from a record, carrying only its text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", message)]
pub struct RecordedError {
    message: String,
}

impl RecordedError {
    /// Creates a recorded error.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The recorded text.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Error for RecordedError {}
