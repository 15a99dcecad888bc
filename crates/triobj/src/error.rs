//! Error types for loading.

use std::path::PathBuf;

use triobj_decode::DecodeError;

/// Errors that can occur while loading an OBJ file.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The file could not be opened or read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Reading from a caller-supplied reader failed.
    #[error("failed to read OBJ data: {0}")]
    Read(#[from] std::io::Error),

    /// The contents were rejected by the decoder.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

impl Error {
    /// The decode failure, if this error came from the decoder.
    #[must_use]
    pub fn as_decode(&self) -> Option<&DecodeError> {
        match self {
            Self::Decode(e) => Some(e),
            Self::Io { .. } | Self::Read(_) => None,
        }
    }
}

/// Result type for load operations.
pub type Result<T> = std::result::Result<T, Error>;
