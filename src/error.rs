use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("emoji directory {} cannot be listed: {source}", path.display())]
    Directory {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to open emoji file {}, quitting early: {source}", path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to read emoji file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Error {
    /// The file or directory a fatal pipeline error is about, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Error::Directory { path, .. }
            | Error::Open { path, .. }
            | Error::Read { path, .. } => Some(path),
            _ => None,
        }
    }
}
