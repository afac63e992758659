use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the batch renamer.
///
/// `DirectoryNotFound` and `InvalidParameter` are fatal for a run and are
/// raised before any file is touched. `RenameFailed` describes a single file
/// and is recorded in that file's outcome instead of aborting the batch.
#[derive(Debug, Error)]
pub enum RenameError {
    #[error("directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("failed to rename {from} -> {to}: {source}")]
    RenameFailed {
        from: String,
        to: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to read directory {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl RenameError {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidParameter(message.into())
    }

    /// True for errors caused by user input rather than the environment.
    pub fn is_user_error(&self) -> bool {
        matches!(self, Self::DirectoryNotFound(_) | Self::InvalidParameter(_))
    }
}

pub type Result<T, E = RenameError> = std::result::Result<T, E>;
