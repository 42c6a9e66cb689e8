use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocsyncError {
    #[error("Cannot read source {}: {source}", .path.display())]
    SourceRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Cannot write readme {}: {source}", .path.display())]
    DestinationWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, DocsyncError>;
