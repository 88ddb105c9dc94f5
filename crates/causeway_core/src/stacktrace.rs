//! Call-stack capture.
//!
//! [`capture`] is the single entry point used by every error constructor. It
//! dispatches to the [`CaptureStrategy`] held by the installed
//! [`Settings`](crate::Settings), which defaults to [`RuntimeCapture`].
//! Tests install a closure returning a [`FixedStacktrace`] instead.

use crate::{Frame, Settings};
use once_cell::sync::OnceCell;
use std::fmt;
use tracing::trace;

/// Default number of raw frames kept per capture.
pub const DEFAULT_MAX_FRAMES: usize = 32;

/// An ordered sequence of call frames, innermost first.
pub trait Stacktrace: fmt::Debug + Send + Sync {
    /// Frames from the capture point outward.
    fn frames(&self) -> &[Frame];

    /// Number of frames.
    fn len(&self) -> usize {
        self.frames().len()
    }

    /// True when no frame was captured.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Produces a [`Stacktrace`] for the caller of [`capture`].
///
/// `skip` counts frames to omit above the caller of [`capture`], so a wrapper
/// can hide itself. Any `Fn(usize) -> Box<dyn Stacktrace>` is a strategy.
///
/// # Examples
///
/// ```
/// use causeway_core::{CaptureStrategy, FixedStacktrace, Frame, Stacktrace};
///
/// let strategy = |_skip: usize| -> Box<dyn Stacktrace> {
///     Box::new(FixedStacktrace::new(vec![Frame::new("app::main", "main.rs", 3)]))
/// };
/// assert_eq!(strategy.capture(0).len(), 1);
/// ```
pub trait CaptureStrategy: Send + Sync {
    /// Captures the current call stack.
    fn capture(&self, skip: usize) -> Box<dyn Stacktrace>;
}

impl<F> CaptureStrategy for F
where
    F: Fn(usize) -> Box<dyn Stacktrace> + Send + Sync,
{
    fn capture(&self, skip: usize) -> Box<dyn Stacktrace> {
        self(skip)
    }
}

/// Captures the call stack of the caller.
///
/// The frame of `capture` itself and everything below it are never part of
/// the result; `skip` more frames above the caller are dropped as well.
///
/// # Examples
///
/// ```
/// use causeway_core::{Stacktrace, capture};
///
/// let stack = capture(0);
/// assert!(stack.len() <= 64);
/// ```
#[inline(never)]
pub fn capture(skip: usize) -> Box<dyn Stacktrace> {
    let strategy = Settings::current().capture_strategy();
    trace!(skip, "Capturing stacktrace");
    strategy.capture(skip)
}

/// Address of [`capture`], used to find where the caller's frames start.
fn capture_anchor() -> usize {
    capture as fn(usize) -> Box<dyn Stacktrace> as usize
}

/// Live stack capture backed by the `backtrace` crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuntimeCapture {
    max_frames: usize,
}

impl RuntimeCapture {
    /// Creates a strategy keeping at most `max_frames` raw frames.
    pub fn new(max_frames: usize) -> Self {
        Self { max_frames }
    }

    /// Maximum number of raw frames kept.
    pub fn max_frames(&self) -> usize {
        self.max_frames
    }
}

impl Default for RuntimeCapture {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_FRAMES)
    }
}

impl CaptureStrategy for RuntimeCapture {
    fn capture(&self, skip: usize) -> Box<dyn Stacktrace> {
        Box::new(RuntimeStacktrace::capture(skip, self.max_frames))
    }
}

/// A stack captured from the running program.
///
/// Only instruction pointers are recorded at capture time. Symbols are
/// resolved on the first call to [`Stacktrace::frames`] and cached.
pub struct RuntimeStacktrace {
    ips: Vec<usize>,
    resolved: OnceCell<Vec<Frame>>,
}

impl RuntimeStacktrace {
    /// Walks the current stack.
    ///
    /// Frames start at the caller of [`capture`] when the walk passes through
    /// it, otherwise at the caller of this function. `skip` more frames are
    /// dropped, then at most `max_frames` are kept.
    #[inline(never)]
    pub fn capture(skip: usize, max_frames: usize) -> Self {
        let anchor = capture_anchor();
        let own = Self::capture as fn(usize, usize) -> Self as usize;

        let mut ips = Vec::with_capacity(max_frames + skip + 8);
        let mut own_start = None;
        let mut anchor_start = None;
        backtrace::trace(|frame| {
            let symbol = frame.symbol_address() as usize;
            ips.push(frame.ip() as usize);
            if anchor_start.is_none() && symbol == anchor {
                anchor_start = Some(ips.len());
            } else if own_start.is_none() && symbol == own {
                own_start = Some(ips.len());
            }
            match anchor_start {
                Some(start) => ips.len() < start + skip + max_frames,
                None => true,
            }
        });

        let start = anchor_start.or(own_start).unwrap_or(0) + skip;
        let ips = if start >= ips.len() {
            Vec::new()
        } else {
            let end = ips.len().min(start + max_frames);
            ips[start..end].to_vec()
        };
        trace!(frames = ips.len(), "Captured runtime stacktrace");

        Self {
            ips,
            resolved: OnceCell::new(),
        }
    }

    fn resolve(&self) -> Vec<Frame> {
        let mut frames = Vec::with_capacity(self.ips.len());
        for &ip in &self.ips {
            let before = frames.len();
            backtrace::resolve(ip as *mut std::ffi::c_void, |symbol| {
                let function = symbol
                    .name()
                    .map(|name| format!("{:#}", name))
                    .unwrap_or_else(|| Frame::UNKNOWN.to_string());
                let file = symbol
                    .filename()
                    .map(|path| path.display().to_string())
                    .unwrap_or_else(|| Frame::UNKNOWN.to_string());
                frames.push(Frame::new(function, file, symbol.lineno().unwrap_or(0)));
            });
            if frames.len() == before {
                frames.push(Frame::new(Frame::UNKNOWN, Frame::UNKNOWN, 0));
            }
        }
        frames
    }
}

impl Stacktrace for RuntimeStacktrace {
    fn frames(&self) -> &[Frame] {
        self.resolved.get_or_init(|| self.resolve())
    }
}

impl fmt::Debug for RuntimeStacktrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuntimeStacktrace")
            .field("ips", &self.ips.len())
            .field("resolved", &self.resolved.get().is_some())
            .finish()
    }
}

/// A fixed, in-memory stack.
///
/// Used as a test double for deterministic output and to replay frames read
/// back from a structured report.
///
/// # Examples
///
/// ```
/// use causeway_core::{FixedStacktrace, Frame, Stacktrace};
///
/// let stack = FixedStacktrace::new(vec![
///     Frame::new("myapp::MyFunction", "file.rs", 123),
///     Frame::new("myapp::main", "main.rs", 45),
/// ]);
/// assert_eq!(stack.len(), 2);
/// assert_eq!(stack.frames()[1].function(), "myapp::main");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixedStacktrace {
    frames: Vec<Frame>,
}

impl FixedStacktrace {
    /// Creates a stack from frames ordered innermost first.
    pub fn new(frames: Vec<Frame>) -> Self {
        Self { frames }
    }
}

impl From<Vec<Frame>> for FixedStacktrace {
    fn from(frames: Vec<Frame>) -> Self {
        Self::new(frames)
    }
}

impl Stacktrace for FixedStacktrace {
    fn frames(&self) -> &[Frame] {
        &self.frames
    }
}
