//! The stack-carrying error value and its constructors.

use crate::{
    Chain, ErrorFormatter, ErrorRecord, FixedStacktrace, Frame, RecordedError, Settings,
    Stacktrace, capture, chain, is,
};
use causeway_error::CausewayResult;
use std::borrow::Cow;
use std::error::Error;
use std::fmt;

/// Any error that can be wrapped or decorated.
///
/// Every `Error + Send + Sync + 'static` type converts into it, as do
/// `String` and `&str`.
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// The next link of a chain.
#[derive(Debug)]
pub enum Cause {
    /// Another error built by this library.
    Traced(Box<TracedError>),
    /// A foreign error. It always ends the chain.
    Foreign(BoxError),
}

impl Cause {
    /// Sorts a boxed error into a traced or foreign link.
    pub fn from_boxed(err: BoxError) -> Self {
        match err.downcast::<TracedError>() {
            Ok(traced) => Cause::Traced(traced),
            Err(foreign) => Cause::Foreign(foreign),
        }
    }

    /// The link as a plain error.
    pub fn as_error(&self) -> &(dyn Error + 'static) {
        match self {
            Cause::Traced(traced) => &**traced,
            Cause::Foreign(foreign) => &**foreign,
        }
    }
}

/// An error carrying a message, an optional cause and the call stack of the
/// place that created it.
///
/// Values are immutable once built. Chains are owned top-down through
/// `Box`, so they are always finite, and dropping one walks the links in a
/// loop.
///
/// # Examples
///
/// ```
/// use causeway_core::{CompactFormatter, TracedError};
///
/// fn open() -> Result<(), TracedError> {
///     Err(TracedError::new("table not found"))
/// }
///
/// fn query() -> Result<(), TracedError> {
///     open().map_err(|err| TracedError::decorate(err, "query failed"))
/// }
///
/// let err = query().unwrap_err();
/// assert_eq!(err.message(), "query failed");
/// assert_eq!(
///     err.render_with(&CompactFormatter).unwrap(),
///     "query failed: table not found"
/// );
/// ```
pub struct TracedError {
    message: String,
    wrapped: Option<Cause>,
    stack: Box<dyn Stacktrace>,
}

impl TracedError {
    /// Creates an error with no cause.
    #[inline(never)]
    pub fn new(message: impl Into<String>) -> Self {
        Self::from_parts(message.into(), None, capture(1))
    }

    /// Makes sure `err` is a [`TracedError`].
    ///
    /// A [`TracedError`] comes back unchanged, keeping the stack of the place
    /// that first created it. Anything else becomes a new error with the
    /// foreign error's text as message and a fresh stack.
    #[inline(never)]
    pub fn wrap<E>(err: E) -> Self
    where
        E: Into<BoxError>,
    {
        let boxed: BoxError = err.into();
        match boxed.downcast::<TracedError>() {
            Ok(traced) => *traced,
            Err(foreign) => Self::from_parts(foreign.to_string(), None, capture(1)),
        }
    }

    /// Adds a new link with `message` on top of `err`.
    #[inline(never)]
    pub fn decorate<E>(err: E, message: impl Into<String>) -> Self
    where
        E: Into<BoxError>,
    {
        Self::from_parts(
            message.into(),
            Some(Cause::from_boxed(err.into())),
            capture(1),
        )
    }

    /// Assembles an error from already captured parts.
    pub fn from_parts(
        message: String,
        wrapped: Option<Cause>,
        stack: Box<dyn Stacktrace>,
    ) -> Self {
        Self {
            message,
            wrapped,
            stack,
        }
    }

    /// This link's own message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The next link, if any.
    pub fn wrapped(&self) -> Option<&(dyn Error + 'static)> {
        self.wrapped.as_ref().map(Cause::as_error)
    }

    /// The next link as a [`Cause`].
    pub fn cause(&self) -> Option<&Cause> {
        self.wrapped.as_ref()
    }

    /// Takes the next link out of this error.
    pub fn into_cause(mut self) -> Option<Cause> {
        self.wrapped.take()
    }

    /// The stack captured when this error was built.
    pub fn stack(&self) -> &dyn Stacktrace {
        self.stack.as_ref()
    }

    /// Walks this error and everything it wraps.
    pub fn chain(&self) -> Chain<'_> {
        chain(self)
    }

    /// True when this chain contains `target`.
    ///
    /// See [`is`](crate::is) for the matching rules.
    pub fn is(&self, target: &(dyn Error + 'static)) -> bool {
        is(Some(self), Some(target))
    }

    /// Renders the chain with the installed default formatter.
    ///
    /// # Errors
    ///
    /// Propagates a failure of the formatter.
    pub fn render(&self) -> CausewayResult<String> {
        Settings::current().formatter().format(self)
    }

    /// Renders the chain with `formatter`.
    ///
    /// # Errors
    ///
    /// Propagates a failure of the formatter.
    pub fn render_with(&self, formatter: &dyn ErrorFormatter) -> CausewayResult<String> {
        formatter.format(self)
    }

    /// The chain as plain data.
    pub fn to_record(&self) -> ErrorRecord {
        ErrorRecord::from_error(self)
    }

    /// Rebuilds a chain from a record.
    ///
    /// Frames are replayed through [`FixedStacktrace`]. An innermost record
    /// below the head that has no frames becomes a foreign
    /// [`RecordedError`], which is how foreign terminals are recorded.
    ///
    /// # Examples
    ///
    /// ```
    /// use causeway_core::{CompactFormatter, ErrorRecord, TracedError};
    ///
    /// let record: ErrorRecord = serde_json::from_str(
    ///     r#"{"message":"process failed","cause":{"message":"disk full"}}"#,
    /// ).unwrap();
    /// let err = TracedError::from_record(record);
    /// assert_eq!(err.render_with(&CompactFormatter).unwrap(), "process failed: disk full");
    /// ```
    pub fn from_record(record: ErrorRecord) -> Self {
        let mut records = Vec::new();
        let mut current = Some(Box::new(record));
        while let Some(mut record) = current {
            current = record.cause.take();
            records.push((
                std::mem::take(&mut record.message),
                std::mem::take(&mut record.stack),
            ));
        }

        let mut links = records.into_iter();
        let (message, stack) = links.next().unwrap_or_default();
        let rest: Vec<(String, Vec<Frame>)> = links.collect();
        let innermost = rest.len();

        let mut cause = None;
        for (index, (message, stack)) in rest.into_iter().enumerate().rev() {
            cause = Some(if index + 1 == innermost && stack.is_empty() {
                Cause::Foreign(Box::new(RecordedError::new(message)))
            } else {
                Cause::Traced(Box::new(Self::from_parts(
                    message,
                    cause.take(),
                    Box::new(FixedStacktrace::new(stack)),
                )))
            });
        }

        Self::from_parts(message, cause, Box::new(FixedStacktrace::new(stack)))
    }
}

impl fmt::Debug for TracedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let causes: Vec<Cow<'_, str>> = self.chain().skip(1).map(|link| link.message()).collect();
        f.debug_struct("TracedError")
            .field("message", &self.message)
            .field("stack", &self.stack)
            .field("causes", &causes)
            .finish()
    }
}

impl Drop for TracedError {
    fn drop(&mut self) {
        let mut next = self.wrapped.take();
        while let Some(Cause::Traced(mut traced)) = next {
            next = traced.wrapped.take();
        }
    }
}

impl fmt::Display for TracedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self.render().map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}

impl Error for TracedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.wrapped()
    }
}

/// Creates an error with no cause.
///
/// # Examples
///
/// ```
/// let err = causeway_core::create("something went wrong");
/// assert_eq!(err.message(), "something went wrong");
/// assert!(err.wrapped().is_none());
/// ```
#[inline(never)]
pub fn create(message: impl Into<String>) -> TracedError {
    TracedError::from_parts(message.into(), None, capture(1))
}

/// Wraps an optional error, passing `None` through.
///
/// See [`TracedError::wrap`].
///
/// # Examples
///
/// ```
/// use causeway_core::wrap;
///
/// assert!(wrap(None::<std::io::Error>).is_none());
/// let err = wrap(Some(std::io::Error::other("reset"))).unwrap();
/// assert_eq!(err.message(), "reset");
/// ```
#[inline(never)]
pub fn wrap<E>(err: Option<E>) -> Option<TracedError>
where
    E: Into<BoxError>,
{
    let boxed: BoxError = err?.into();
    Some(match boxed.downcast::<TracedError>() {
        Ok(traced) => *traced,
        Err(foreign) => TracedError::from_parts(foreign.to_string(), None, capture(1)),
    })
}

/// Decorates an optional error, passing `None` through.
///
/// See [`TracedError::decorate`].
#[inline(never)]
pub fn decorate<E>(err: Option<E>, message: impl Into<String>) -> Option<TracedError>
where
    E: Into<BoxError>,
{
    let err = err?;
    Some(TracedError::from_parts(
        message.into(),
        Some(Cause::from_boxed(err.into())),
        capture(1),
    ))
}

/// Decorates an optional error with a formatted message.
///
/// Usually reached through [`decoratef!`](crate::decoratef).
#[inline(never)]
pub fn decorate_fmt<E>(err: Option<E>, args: fmt::Arguments<'_>) -> Option<TracedError>
where
    E: Into<BoxError>,
{
    let err = err?;
    Some(TracedError::from_parts(
        fmt::format(args),
        Some(Cause::from_boxed(err.into())),
        capture(1),
    ))
}

/// Decorates an optional error with a `format!`-style message.
///
/// # Examples
///
/// ```
/// use causeway_core::{CompactFormatter, TracedError, decoratef};
///
/// let err = decoratef!(Some(TracedError::new("timed out")), "attempt {} of {}", 3, 5).unwrap();
/// assert_eq!(err.render_with(&CompactFormatter).unwrap(), "attempt 3 of 5: timed out");
/// ```
#[macro_export]
macro_rules! decoratef {
    ($err:expr, $($arg:tt)+) => {
        $crate::decorate_fmt($err, ::std::format_args!($($arg)+))
    };
}

/// Creates an error with a `format!`-style message.
///
/// # Examples
///
/// ```
/// let err = causeway_core::traced!("table not found '{}'", "users");
/// assert_eq!(err.message(), "table not found 'users'");
/// ```
#[macro_export]
macro_rules! traced {
    ($($arg:tt)+) => {
        $crate::create(::std::format!($($arg)+))
    };
}

/// Tracing and decoration for `Result`s.
///
/// # Examples
///
/// ```
/// use causeway_core::{CompactFormatter, ResultExt};
///
/// fn read() -> Result<String, std::io::Error> {
///     Err(std::io::Error::other("permission denied"))
/// }
///
/// let err = read().decorate("loading settings").unwrap_err();
/// assert_eq!(
///     err.render_with(&CompactFormatter).unwrap(),
///     "loading settings: permission denied"
/// );
/// ```
pub trait ResultExt<T> {
    /// Wraps the error, see [`TracedError::wrap`].
    fn traced(self) -> Result<T, TracedError>;

    /// Decorates the error, see [`TracedError::decorate`].
    fn decorate(self, message: impl Into<String>) -> Result<T, TracedError>;

    /// Decorates the error with a message built only on failure.
    fn decorate_with<M, F>(self, message: F) -> Result<T, TracedError>
    where
        M: Into<String>,
        F: FnOnce() -> M;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<BoxError>,
{
    #[inline(never)]
    fn traced(self) -> Result<T, TracedError> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => {
                let boxed: BoxError = err.into();
                Err(match boxed.downcast::<TracedError>() {
                    Ok(traced) => *traced,
                    Err(foreign) => {
                        TracedError::from_parts(foreign.to_string(), None, capture(1))
                    }
                })
            }
        }
    }

    #[inline(never)]
    fn decorate(self, message: impl Into<String>) -> Result<T, TracedError> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(TracedError::from_parts(
                message.into(),
                Some(Cause::from_boxed(err.into())),
                capture(1),
            )),
        }
    }

    #[inline(never)]
    fn decorate_with<M, F>(self, message: F) -> Result<T, TracedError>
    where
        M: Into<String>,
        F: FnOnce() -> M,
    {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(TracedError::from_parts(
                message().into(),
                Some(Cause::from_boxed(err.into())),
                capture(1),
            )),
        }
    }
}
