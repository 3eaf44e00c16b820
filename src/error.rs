use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum Tree2CmdError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Input is not valid UTF-8: {path}")]
    InvalidUtf8 { path: PathBuf },
    #[error("Serialization failed: {0}")]
    Serialize(String),
}
impl Tree2CmdError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Tree2CmdError::Io {
            path: path.into(),
            source,
        }
    }
}
