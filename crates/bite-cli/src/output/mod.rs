use serde::Serialize;

use crate::cli::OutputFormat;

pub mod views;

/// A command reply: serializable for `--format json`, with a chat-style
/// text rendering for `--format text`.
pub trait Reply: Serialize {
    fn text(&self) -> String;
}

/// Render a reply to a string in the requested format.
pub fn render<T: Reply>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Text => Ok(value.text()),
    }
}

/// Print a reply in the requested format.
pub fn output<T: Reply>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}
