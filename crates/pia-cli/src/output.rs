//! Output formatting for CLI commands.

use serde::Serialize;
use std::io::Write;

use crate::cli::{CommandContext, OutputFormat};
use crate::error::CliError;

/// Types that can be printed as text or JSON.
pub trait FormattedOutput {
    fn format_text(&self) -> String;

    fn format_json(&self) -> Result<String, serde_json::Error>
    where
        Self: Serialize,
    {
        serde_json::to_string_pretty(self)
    }
}

/// Render `value` in the format selected on the command line.
pub fn render<T>(format: OutputFormat, value: &T) -> Result<String, CliError>
where
    T: FormattedOutput + Serialize,
{
    match format {
        OutputFormat::Text => Ok(value.format_text()),
        OutputFormat::Json => value
            .format_json()
            .map_err(|e| CliError::Other(anyhow::anyhow!("JSON serialization failed: {}", e))),
    }
}

/// Print formatted output to stdout.
pub fn print_output<T>(ctx: &CommandContext, value: &T) -> Result<(), CliError>
where
    T: FormattedOutput + Serialize,
{
    write_output(ctx, value, std::io::stdout().lock())
}

/// Print formatted output to a writer.
pub fn write_output<T, W>(ctx: &CommandContext, value: &T, mut writer: W) -> Result<(), CliError>
where
    T: FormattedOutput + Serialize,
    W: Write,
{
    let output = render(ctx.format, value)?;
    writeln!(writer, "{}", output).map_err(|e| CliError::Io {
        message: "failed to write output".to_string(),
        source: e,
        path: None,
    })
}

/// A single line of output.
#[derive(Debug, Serialize)]
pub struct SimpleOutput {
    pub message: String,
}

impl SimpleOutput {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl FormattedOutput for SimpleOutput {
    fn format_text(&self) -> String {
        self.message.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_simple_output() {
        let out = SimpleOutput::new("3-days-ago");
        assert_eq!(render(OutputFormat::Text, &out).unwrap(), "3-days-ago");

        let json = render(OutputFormat::Json, &out).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["message"], "3-days-ago");
    }
}
