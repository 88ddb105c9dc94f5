//! CLI command definitions.

use causeway::FormatStyle;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// causeway - render recorded error reports
#[derive(Parser, Debug)]
#[command(name = "causeway")]
#[command(about = "Render recorded error reports as compact, multi-line or JSON text", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a structured error report
    Render {
        /// Output style (compact, multiline, structured); defaults to the configured style
        #[arg(long)]
        style: Option<FormatStyle>,

        /// Indent structured output
        #[arg(long)]
        pretty: bool,

        /// Path to the JSON report; reads stdin when omitted
        path: Option<PathBuf>,
    },

    /// Print the effective configuration as TOML
    Config,
}
