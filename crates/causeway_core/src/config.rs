//! Configuration for capture depth and default formatting.
//!
//! Sources, later ones overriding earlier ones:
//! - Bundled defaults (include_str! from causeway.toml)
//! - `~/.config/causeway/causeway.toml`
//! - `./causeway.toml`
//! - `CAUSEWAY_*` environment variables (`CAUSEWAY_DEFAULT_STYLE=compact`)

use crate::{FormatStyle, Settings, stacktrace::DEFAULT_MAX_FRAMES};
use causeway_error::{CausewayError, CausewayResult, ConfigError};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Bundled default configuration.
const DEFAULT_CONFIG: &str = include_str!("../causeway.toml");

/// Library configuration.
///
/// # Example
///
/// ```toml
/// default_style = "compact"
/// max_frames = 16
/// pretty_json = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CausewayConfig {
    /// Formatter used by `render()` and `Display`
    #[serde(default)]
    pub default_style: FormatStyle,

    /// Maximum number of raw frames captured per error
    #[serde(default = "default_max_frames")]
    pub max_frames: usize,

    /// Indent structured output
    #[serde(default)]
    pub pretty_json: bool,
}

fn default_max_frames() -> usize {
    DEFAULT_MAX_FRAMES
}

impl Default for CausewayConfig {
    fn default() -> Self {
        Self {
            default_style: FormatStyle::default(),
            max_frames: DEFAULT_MAX_FRAMES,
            pretty_json: false,
        }
    }
}

impl CausewayConfig {
    /// Load configuration from a specific file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> CausewayResult<Self> {
        debug!("Loading configuration from file");

        Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                CausewayError::from(ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                CausewayError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Load configuration with precedence: environment > current dir > home dir > bundled default.
    ///
    /// User config files are optional and silently skipped when missing.
    ///
    /// # Errors
    ///
    /// Returns an error if a present source cannot be parsed.
    #[instrument]
    pub fn load() -> CausewayResult<Self> {
        debug!("Loading configuration with precedence: env > current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/causeway/causeway.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder
            .add_source(File::with_name("causeway").required(false))
            .add_source(Environment::with_prefix("CAUSEWAY").try_parsing(true));

        builder
            .build()
            .map_err(|e| {
                CausewayError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                CausewayError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Parse configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid configuration.
    pub fn from_toml_str(text: &str) -> CausewayResult<Self> {
        Config::builder()
            .add_source(File::from_str(text, FileFormat::Toml))
            .build()
            .and_then(Config::try_deserialize::<Self>)
            .map_err(|e| {
                CausewayError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Builds [`Settings`] from this configuration and installs them for good.
    pub fn install(&self) {
        debug!(style = %self.default_style, max_frames = self.max_frames, "Applying configuration");
        Settings::from_config(self).install().keep();
    }
}
