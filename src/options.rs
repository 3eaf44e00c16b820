use serde::{Deserialize, Serialize};
use std::path::PathBuf;
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputSource {
    Text(String),
    File(PathBuf),
    Stdin,
}
impl InputSource {
    /// Maps a CLI argument to a source: `None` or `-` reads stdin.
    pub fn from_arg(arg: Option<PathBuf>) -> Self {
        match arg {
            Some(path) if path.as_os_str() != "-" => InputSource::File(path),
            _ => InputSource::Stdin,
        }
    }
}
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertOptions {
    pub input: InputSource,
}
impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            input: InputSource::Stdin,
        }
    }
}
#[derive(Debug, Default)]
pub struct ConvertBuilder {
    options: ConvertOptions,
}
impl ConvertBuilder {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.options.input = InputSource::Text(text.into());
        self
    }
    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.options.input = InputSource::File(path.into());
        self
    }
    pub fn stdin(mut self) -> Self {
        self.options.input = InputSource::Stdin;
        self
    }
    pub fn input(mut self, input: InputSource) -> Self {
        self.options.input = input;
        self
    }
    pub fn build(self) -> ConvertOptions {
        self.options
    }
}
