//! Config command handler.

use causeway::{CausewayConfig, CausewayResult, ConfigError};

/// Prints the effective configuration as TOML.
pub fn handle_config_command(config: &CausewayConfig) -> CausewayResult<()> {
    let text = toml::to_string(config)
        .map_err(|e| ConfigError::new(format!("Failed to serialize configuration: {}", e)))?;
    print!("{}", text);
    Ok(())
}
