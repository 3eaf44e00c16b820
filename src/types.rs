use serde::{Deserialize, Serialize};

/// One line of a tree diagram.
///
/// Entries carry no parent or child links: the hierarchy is encoded by `depth`
/// alone, and a sequence of entries is the pre-order flattening of the diagram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// The file or directory name, trimmed. May be empty for a bare connector line.
    pub name: String,
    /// Nesting level, `0` for top-level lines.
    pub depth: usize,
    /// Whether the name looks like a file (see [`crate::is_file_name`]).
    pub is_file: bool,
}

impl Entry {
    pub fn new(name: impl Into<String>, depth: usize, is_file: bool) -> Self {
        Self {
            name: name.into(),
            depth,
            is_file,
        }
    }
}

/// The complete result of a conversion.
#[derive(Debug, Serialize, Deserialize)]
pub struct ConversionResult {
    /// Parsed entries, in input line order.
    pub entries: Vec<Entry>,
    /// Newline-joined shell commands, without a trailing newline.
    ///
    /// Empty when the input had no non-blank lines.
    pub commands: String,
}
