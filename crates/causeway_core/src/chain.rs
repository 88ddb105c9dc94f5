//! Walking a causal chain one link at a time.

use crate::TracedError;
use std::borrow::Cow;
use std::error::Error;

/// One step of a causal chain.
///
/// A chain is a run of [`TracedError`] links, optionally ended by a single
/// foreign error. Anything a foreign error wraps is not part of the chain.
#[derive(Debug, Clone, Copy)]
pub enum Link<'a> {
    /// A link built by this library.
    Traced(&'a TracedError),
    /// A foreign error terminating the chain.
    Foreign(&'a (dyn Error + 'static)),
}

impl<'a> Link<'a> {
    /// Classifies an arbitrary error.
    pub fn classify(err: &'a (dyn Error + 'static)) -> Self {
        match err.downcast_ref::<TracedError>() {
            Some(traced) => Link::Traced(traced),
            None => Link::Foreign(err),
        }
    }

    /// The text this link contributes on its own.
    ///
    /// For a traced link this is its message, not the rendering of the
    /// whole chain below it.
    pub fn message(&self) -> Cow<'a, str> {
        match self {
            Link::Traced(traced) => Cow::Borrowed(traced.message()),
            Link::Foreign(err) => Cow::Owned(err.to_string()),
        }
    }

    /// The link as a plain error.
    pub fn as_error(&self) -> &'a (dyn Error + 'static) {
        match *self {
            Link::Traced(traced) => traced,
            Link::Foreign(err) => err,
        }
    }
}

/// Iterator over the links of a chain, outermost first.
///
/// # Examples
///
/// ```
/// use causeway_core::{Link, TracedError, chain};
///
/// let io = std::io::Error::other("connection reset");
/// let err = TracedError::decorate(io, "fetch failed");
///
/// let links: Vec<_> = chain(&err).collect();
/// assert_eq!(links.len(), 2);
/// assert!(matches!(links[0], Link::Traced(_)));
/// assert!(matches!(links[1], Link::Foreign(_)));
/// assert_eq!(links[1].message(), "connection reset");
/// ```
#[derive(Debug, Clone)]
pub struct Chain<'a> {
    next: Option<Link<'a>>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = Link<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        if let Link::Traced(traced) = current {
            self.next = traced.wrapped().map(Link::classify);
        }
        Some(current)
    }
}

/// Starts a chain walk at `head`.
pub fn chain<'a>(head: &'a (dyn Error + 'static)) -> Chain<'a> {
    Chain {
        next: Some(Link::classify(head)),
    }
}
