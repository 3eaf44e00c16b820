use crate::commands::build_commands;
use crate::error::Tree2CmdError;
use crate::options::{ConvertOptions, InputSource};
use crate::parser::extract_entries;
use crate::types::ConversionResult;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
fn decode(path: &Path, bytes: Vec<u8>) -> Result<String, Tree2CmdError> {
    String::from_utf8(bytes).map_err(|_| Tree2CmdError::InvalidUtf8 {
        path: path.to_path_buf(),
    })
}
fn read_input(input: InputSource) -> Result<String, Tree2CmdError> {
    match input {
        InputSource::Text(text) => Ok(text),
        InputSource::File(path) => {
            #[cfg(feature = "logging")]
            tracing::debug!("Reading tree from {}", path.display());
            let bytes = fs::read(&path).map_err(|e| Tree2CmdError::io(&path, e))?;
            decode(&path, bytes)
        }
        InputSource::Stdin => {
            #[cfg(feature = "logging")]
            tracing::debug!("Reading tree from stdin");
            let stdin_path = PathBuf::from("-");
            let mut bytes = Vec::new();
            io::stdin()
                .lock()
                .read_to_end(&mut bytes)
                .map_err(|e| Tree2CmdError::io(&stdin_path, e))?;
            decode(&stdin_path, bytes)
        }
    }
}
/// Converts a tree diagram into newline-joined `mkdir -p` / `touch` commands.
///
/// Never fails: blank input gives an empty string, malformed input gives a
/// well-defined (if odd) command list.
///
/// ```
/// let commands = tree2cmd::parse_tree("app\n   └─ main.rs");
/// assert_eq!(commands, "mkdir -p app\nmkdir -p app\ntouch app/main.rs");
/// ```
pub fn parse_tree(input: &str) -> String {
    let entries = extract_entries(input);
    build_commands(&entries)
}
/// Reads the configured input and converts it, keeping the parsed entries.
pub fn convert(options: ConvertOptions) -> Result<ConversionResult, Tree2CmdError> {
    let text = read_input(options.input)?;
    let entries = extract_entries(&text);
    let commands = build_commands(&entries);
    Ok(ConversionResult { entries, commands })
}
