//! Shell command generation from parsed entries.

use crate::types::Entry;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The ancestry of the entry currently being processed, one name per depth.
///
/// Position `i` holds the name at nesting level `i`. Placing an entry drops
/// everything at and below its depth before pushing its name, so siblings
/// replace each other and a shallower entry forgets the deeper ones.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PathStack {
    names: Vec<String>,
}

impl PathStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `name` the last element, at index `depth` or at the end if the
    /// stack is shorter than `depth`.
    ///
    /// A depth jump past the current length appends instead of leaving holes:
    /// `["root"]` followed by a depth-3 `x` gives `["root", "x"]`.
    pub fn place(&mut self, depth: usize, name: &str) {
        self.names.truncate(depth);
        self.names.push(name.to_string());
    }

    /// All names joined with `/`.
    pub fn full_path(&self) -> String {
        self.names.join("/")
    }

    /// Every name but the last, joined with `/`. Empty at the top level.
    pub fn parent_path(&self) -> String {
        match self.names.split_last() {
            Some((_, parents)) => parents.join("/"),
            None => String::new(),
        }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// A single generated command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", content = "path", rename_all = "lowercase")]
pub enum ShellCommand {
    /// `mkdir -p {path}`
    Mkdir(String),
    /// `touch {path}`
    Touch(String),
}

impl ShellCommand {
    pub fn path(&self) -> &str {
        match self {
            ShellCommand::Mkdir(path) | ShellCommand::Touch(path) => path,
        }
    }
}

impl fmt::Display for ShellCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShellCommand::Mkdir(path) => write!(f, "mkdir -p {}", path),
            ShellCommand::Touch(path) => write!(f, "touch {}", path),
        }
    }
}

/// Walks `entries` once and emits the commands that recreate them, in order.
///
/// Directories produce `mkdir -p {path}`. Files produce `mkdir -p {parent}`
/// (skipped when the parent is empty) followed by `touch {path}`. Nothing is
/// deduplicated: two files in the same directory each get their own `mkdir -p`.
pub fn emit_commands(entries: &[Entry]) -> Vec<ShellCommand> {
    let mut stack = PathStack::new();
    let mut commands = Vec::with_capacity(entries.len());
    for entry in entries {
        stack.place(entry.depth, &entry.name);
        let full_path = stack.full_path();
        if entry.is_file {
            let parent_dir = stack.parent_path();
            if !parent_dir.is_empty() {
                commands.push(ShellCommand::Mkdir(parent_dir));
            }
            commands.push(ShellCommand::Touch(full_path));
        } else {
            commands.push(ShellCommand::Mkdir(full_path));
        }
    }
    #[cfg(feature = "logging")]
    tracing::debug!(
        "Emitted {} commands for {} entries",
        commands.len(),
        entries.len()
    );
    commands
}

/// Same as [`emit_commands`], rendered as newline-joined text with no trailing newline.
pub fn build_commands(entries: &[Entry]) -> String {
    emit_commands(entries)
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
