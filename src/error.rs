use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum MergeError {
    /// The target document already documents the version being released.
    #[error("found heading for version {version} at line {line}, it must not exist yet")]
    DuplicateVersion { version: String, line: usize },

    #[error("no \"Latest Version\" headline found in the output document")]
    MissingLatestVersion,

    #[error("version file {path:?} does not contain a version string")]
    EmptyVersionFile { path: PathBuf },

    #[error("{path:?} {reason}")]
    InvalidInput { path: PathBuf, reason: String },

    #[error("I/O error at {path:?}: {source}")]
    Io { path: PathBuf, source: io::Error },
}

pub type Result<T> = std::result::Result<T, MergeError>;

impl MergeError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        MergeError::Io {
            path: path.into(),
            source,
        }
    }
}
