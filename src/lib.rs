//! # tree2cmd
//!
//! `tree2cmd` turns a textual tree diagram, the kind drawn with `├─` and `└─`
//! connectors, into the `mkdir -p` and `touch` commands that recreate it.
//!
//! The core is pure: [`parse_tree`] maps a string to a string and never fails.
//! [`convert`] adds input handling (text, file, or stdin) on top of it, and the
//! [`output`] module renders a [`ConversionResult`] as commands, Markdown, or JSON.
//!
//! # Features
//!
//! - `logging`: Enables debug logging via the `tracing` crate.
//!
//! # Example
//!
//! ```
//! let input = "my-project\n   ├─ package.json\n   └─ src\n      └─ main.ts";
//! let commands = tree2cmd::parse_tree(input);
//! assert_eq!(
//!     commands,
//!     "mkdir -p my-project\n\
//!      mkdir -p my-project\n\
//!      touch my-project/package.json\n\
//!      mkdir -p my-project/src\n\
//!      mkdir -p my-project/src\n\
//!      touch my-project/src/main.ts"
//! );
//! ```
//!
//! Indentation is counted in units of three whitespace characters, so the
//! connector lines above sit one level below `my-project`.

mod commands;
mod engine;
mod error;
mod options;
pub mod output;
mod parser;
mod types;

pub use commands::{PathStack, ShellCommand, build_commands, emit_commands};
pub use engine::{convert, parse_tree};
pub use error::Tree2CmdError;
pub use options::{ConvertBuilder, ConvertOptions, InputSource};
pub use parser::{INDENT_WIDTH, extract_entries, is_file_name};
pub use types::{ConversionResult, Entry};
