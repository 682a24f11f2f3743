use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ArtError>;

/// Errors raised while loading an art file.
#[derive(Error, Debug)]
pub enum ArtError {
    #[error("ASCII art file not found: {}", path.display())]
    ResourceNotFound { path: PathBuf },

    #[error("ASCII art file {} is not valid UTF-8: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("failed to read ASCII art file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
