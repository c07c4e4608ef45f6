use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced to the event loop and `main`.
#[derive(Debug, Error)]
pub enum Error {
    /// Highscore file exists but could not be read.
    #[error("failed to read highscore from {path}: {source}")]
    PersistenceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Highscore could not be written.
    #[error("failed to save highscore to {path}: {source}")]
    PersistenceWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Stored duration text is not parseable.
    #[error("malformed duration {input:?}: {reason}")]
    MalformedDuration { input: String, reason: &'static str },

    /// Config file exists but is not valid.
    #[error("invalid config at {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
