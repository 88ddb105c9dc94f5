//! Error types for the causeway library itself.
//!
//! causeway is an error-tracing library, but loading its configuration,
//! reading reports and serializing structured output can still fail. Those failures are
//! described here.
//!
//! # Error Hierarchy
//!
//! - `*Error` structs carry a message plus the source location that created them
//! - [`CausewayErrorKind`] gathers every failure family
//! - [`CausewayError`] boxes the kind so results stay small
//!
//! # Examples
//!
//! ```
//! use causeway_error::{CausewayResult, ConfigError};
//!
//! fn load() -> CausewayResult<u32> {
//!     Err(ConfigError::new("max_frames must be positive"))?
//! }
//!
//! assert!(load().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod io;
mod json;

pub use config::ConfigError;
pub use error::{CausewayError, CausewayErrorKind, CausewayResult};
pub use io::IoError;
pub use json::JsonError;
