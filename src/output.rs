//! Output formatting for conversion results.
//!
//! Provides functions to format a [`ConversionResult`] as plain commands,
//! a Markdown code block, or JSON.

use crate::{ConversionResult, Tree2CmdError};
use std::fs;
use std::path::Path;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Commands,
    Markdown,
    Json,
}

impl OutputFormat {
    /// Returns the conventional file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Commands => "sh",
            OutputFormat::Markdown => "md",
            OutputFormat::Json => "json",
        }
    }
}

/// Formats the conversion result into a string.
pub fn format_result(
    result: &ConversionResult,
    format: OutputFormat,
    pretty: bool,
) -> Result<String, Tree2CmdError> {
    match format {
        OutputFormat::Commands => Ok(format_commands(result)),
        OutputFormat::Markdown => Ok(format_markdown(result)),
        OutputFormat::Json => format_json(result, pretty),
    }
}

/// Writes the formatted result to a file.
pub fn write_result_to_file(
    result: &ConversionResult,
    format: OutputFormat,
    path: impl AsRef<Path>,
    pretty: bool,
) -> Result<(), Tree2CmdError> {
    let content = format_result(result, format, pretty)?;
    fs::write(&path, content).map_err(|e| Tree2CmdError::io(path.as_ref(), e))?;
    Ok(())
}

// ----------------------- Internal formatting -----------------------

fn format_commands(result: &ConversionResult) -> String {
    let mut out = String::with_capacity(result.commands.len() + 1);
    out.push_str(&result.commands);
    if !out.is_empty() {
        out.push('\n');
    }
    out
}

fn format_markdown(result: &ConversionResult) -> String {
    let mut out = String::with_capacity(result.commands.len() + 16);
    out.push_str("```bash\n");
    out.push_str(&result.commands);
    if !result.commands.is_empty() {
        out.push('\n');
    }
    out.push_str("```\n");
    out
}

fn format_json(result: &ConversionResult, pretty: bool) -> Result<String, Tree2CmdError> {
    let json = if pretty {
        serde_json::to_string_pretty(result)
    } else {
        serde_json::to_string(result)
    };
    json.map(|mut out| {
        out.push('\n');
        out
    })
    .map_err(|e| Tree2CmdError::Serialize(e.to_string()))
}
