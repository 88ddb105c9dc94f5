//! Render command handler.

use causeway::{CausewayConfig, CausewayResult, FormatStyle, TracedError, read_report};
use std::path::Path;
use tracing::{debug, info};

/// Reads a report and prints it in the requested style.
///
/// Missing options fall back to the loaded configuration.
pub fn handle_render_command(
    config: &CausewayConfig,
    style: Option<FormatStyle>,
    pretty: bool,
    path: Option<&Path>,
) -> CausewayResult<()> {
    let style = style.unwrap_or(config.default_style);
    let pretty = pretty || config.pretty_json;
    info!(%style, pretty, "Rendering report");

    let record = read_report(path)?;
    debug!(depth = record.depth(), "Parsed report");

    let err = TracedError::from_record(record);
    let text = err.render_with(style.formatter(pretty).as_ref())?;
    println!("{}", text);
    Ok(())
}
