//! Tree line parsing.
//!
//! Turns the text of a tree diagram into an ordered list of [`Entry`] values.
//! Depth comes from the leading whitespace before a `├─` or `└─` connector,
//! one level per three characters. Lines without a connector (the root line)
//! are depth 0.

use crate::types::Entry;
use regex::Regex;
use std::sync::LazyLock;

/// Number of leading whitespace characters per nesting level.
pub const INDENT_WIDTH: usize = 3;

// U+FEFF counts as whitespace, so a byte-order mark never shifts depth or
// leaks into a name. Names stop short of CR and the Unicode line separators.
static LINE_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([\s\x{FEFF}]*)[├└]─[\s\x{FEFF}]*([^\r\x{2028}\x{2029}]*)$")
        .expect("valid line prefix regex")
});

// ASCII word characters only, matching how the diagrams are usually typed.
static FILE_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.[0-9A-Za-z_]+$").expect("valid file suffix regex"));

/// Returns `true` when `name` ends in a dot followed by one or more word characters.
///
/// This is a heuristic. A directory named `archive.v2` is reported as a file,
/// and a file without an extension (`Makefile`) as a directory.
///
/// ```
/// assert!(tree2cmd::is_file_name("archive.tar.gz"));
/// assert!(!tree2cmd::is_file_name("README"));
/// assert!(!tree2cmd::is_file_name("node_modules."));
/// ```
pub fn is_file_name(name: &str) -> bool {
    FILE_SUFFIX.is_match(name)
}

fn is_blank(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

/// Parses one non-blank line into its name and depth.
fn parse_line(line: &str) -> (String, usize) {
    match LINE_PREFIX.captures(line) {
        Some(caps) => {
            let indent = caps.get(1).map_or(0, |m| m.as_str().chars().count());
            let name = caps.get(2).map_or("", |m| m.as_str()).trim_matches(is_blank);
            (name.to_string(), indent / INDENT_WIDTH)
        }
        None => (line.trim_matches(is_blank).to_string(), 0),
    }
}

/// Splits `input` into lines and parses every non-blank one into an [`Entry`].
///
/// Trailing whitespace (including U+FEFF) is stripped before the blank check,
/// so whitespace-only lines are dropped too. They never affect the depth of
/// the lines after them. Output order is input order.
pub fn extract_entries(input: &str) -> Vec<Entry> {
    let entries: Vec<Entry> = input
        .split('\n')
        .map(|line| line.trim_end_matches(is_blank))
        .filter(|line| !line.is_empty())
        .map(|line| {
            let (name, depth) = parse_line(line);
            #[cfg(feature = "logging")]
            tracing::trace!(depth, name = %name, "parsed tree line");
            let is_file = is_file_name(&name);
            Entry {
                name,
                depth,
                is_file,
            }
        })
        .collect();
    #[cfg(feature = "logging")]
    tracing::debug!("Extracted {} entries", entries.len());
    entries
}
