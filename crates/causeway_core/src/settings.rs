//! Process-wide capture strategy and default formatter.
//!
//! Settings are meant to be installed once at startup, or inside a
//! single-threaded test that restores them on exit. Readers on other threads
//! may see either the previous or the new settings while an install is in
//! progress; nothing stronger is guaranteed.

use crate::{
    CaptureStrategy, CausewayConfig, ErrorFormatter, MultilineFormatter, RuntimeCapture,
};
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

static INSTALLED: RwLock<Option<Settings>> = RwLock::new(None);

static DEFAULT: Lazy<Settings> = Lazy::new(Settings::new);

/// The capture strategy and default formatter used by every error value.
///
/// # Examples
///
/// ```standalone_crate
/// use causeway_core::{CompactFormatter, Settings, TracedError};
///
/// let guard = Settings::new()
///     .with_formatter(CompactFormatter)
///     .install();
///
/// let err = TracedError::decorate(TracedError::new("disk full"), "save failed");
/// assert_eq!(err.to_string(), "save failed: disk full");
///
/// drop(guard);
/// assert!(err.to_string().starts_with("save failed\n"));
/// ```
#[derive(Clone)]
pub struct Settings {
    capture: Arc<dyn CaptureStrategy>,
    formatter: Arc<dyn ErrorFormatter>,
}

impl Settings {
    /// Live capture with the default depth and the multi-line formatter.
    pub fn new() -> Self {
        Self {
            capture: Arc::new(RuntimeCapture::default()),
            formatter: Arc::new(MultilineFormatter),
        }
    }

    /// Builds settings from a loaded configuration.
    pub fn from_config(config: &CausewayConfig) -> Self {
        Self {
            capture: Arc::new(RuntimeCapture::new(config.max_frames)),
            formatter: config.default_style.formatter(config.pretty_json),
        }
    }

    /// Replaces the capture strategy.
    pub fn with_capture(mut self, strategy: impl CaptureStrategy + 'static) -> Self {
        self.capture = Arc::new(strategy);
        self
    }

    /// Replaces the default formatter.
    pub fn with_formatter(mut self, formatter: impl ErrorFormatter + 'static) -> Self {
        self.formatter = Arc::new(formatter);
        self
    }

    /// Replaces the default formatter with a shared instance.
    pub fn with_shared_formatter(mut self, formatter: Arc<dyn ErrorFormatter>) -> Self {
        self.formatter = formatter;
        self
    }

    /// The capture strategy.
    pub fn capture_strategy(&self) -> Arc<dyn CaptureStrategy> {
        Arc::clone(&self.capture)
    }

    /// The default formatter.
    pub fn formatter(&self) -> Arc<dyn ErrorFormatter> {
        Arc::clone(&self.formatter)
    }

    /// The settings currently installed, or the defaults.
    pub fn current() -> Settings {
        INSTALLED.read().as_ref().unwrap_or(&*DEFAULT).clone()
    }

    /// Installs these settings process-wide.
    ///
    /// The returned guard puts the previous settings back when dropped. Keep
    /// it alive for as long as the settings should apply; call
    /// [`SettingsGuard::keep`] to make the change permanent.
    #[must_use = "dropping the guard immediately restores the previous settings"]
    pub fn install(self) -> SettingsGuard {
        debug!("Installing causeway settings");
        let previous = INSTALLED.write().replace(self);
        SettingsGuard {
            previous: Some(previous),
        }
    }

    /// Installs a capture strategy on top of the current settings.
    #[must_use = "dropping the guard immediately restores the previous settings"]
    pub fn set_capture(strategy: impl CaptureStrategy + 'static) -> SettingsGuard {
        Self::current().with_capture(strategy).install()
    }

    /// Installs a default formatter on top of the current settings.
    #[must_use = "dropping the guard immediately restores the previous settings"]
    pub fn set_formatter(formatter: impl ErrorFormatter + 'static) -> SettingsGuard {
        Self::current().with_formatter(formatter).install()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings").finish_non_exhaustive()
    }
}

/// Restores the previously installed settings on drop.
#[derive(Debug)]
pub struct SettingsGuard {
    previous: Option<Option<Settings>>,
}

impl SettingsGuard {
    /// Keeps the installed settings after the guard goes away.
    pub fn keep(mut self) {
        self.previous = None;
    }
}

impl Drop for SettingsGuard {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            debug!("Restoring previous causeway settings");
            *INSTALLED.write() = previous;
        }
    }
}
