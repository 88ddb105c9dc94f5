//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the causeway binary.

mod commands;
mod config;
mod render;

pub use commands::{Cli, Commands};
pub use config::handle_config_command;
pub use render::handle_render_command;
