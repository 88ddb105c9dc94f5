//! Chain membership checks.

use crate::{Link, chain};
use std::error::Error;

/// True when `err`, or any link it wraps, is `target`.
///
/// Links are walked outermost first. A link matches when it is the very same
/// value as `target`, or when its own message equals the target's message
/// exactly. The message of a [`TracedError`](crate::TracedError) is its link
/// message; the message of a foreign error is its `Display` text.
///
/// `None` on either side never matches, not even `None` against `None`.
///
/// # Examples
///
/// ```
/// use causeway_core::{TracedError, is};
///
/// let root = TracedError::new("table not found");
/// let err = TracedError::decorate(TracedError::new("table not found"), "query failed");
///
/// assert!(is(Some(&err), Some(&root)));
/// assert!(!is(Some(&TracedError::new("table not found 'users'")), Some(&root)));
/// assert!(!is(None, Some(&root)));
/// ```
pub fn is(err: Option<&(dyn Error + 'static)>, target: Option<&(dyn Error + 'static)>) -> bool {
    let (Some(err), Some(target)) = (err, target) else {
        return false;
    };

    let wanted = Link::classify(target).message();
    chain(err).any(|link| {
        let candidate = link.as_error();
        std::ptr::addr_eq(candidate as *const dyn Error, target as *const dyn Error)
            || link.message() == wanted
    })
}
