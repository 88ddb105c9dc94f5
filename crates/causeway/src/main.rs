//! causeway CLI binary.
//!
//! This binary re-renders structured error reports:
//! - Render a JSON report in compact, multi-line or structured style
//! - Show the effective configuration

use clap::Parser;

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, handle_config_command, handle_render_command};

    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = causeway::CausewayConfig::load()?;

    // Execute the requested command
    match cli.command {
        Commands::Render {
            style,
            pretty,
            path,
        } => {
            handle_render_command(&config, style, pretty, path.as_deref())?;
        }

        Commands::Config => {
            handle_config_command(&config)?;
        }
    }

    Ok(())
}
