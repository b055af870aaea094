//! Error types for the build phases.

use std::io;
use std::path::PathBuf;

use thiserror::Error;
use walk::ScanError;

/// Result type for build operations.
pub type BuildResult<T> = Result<T, BuildError>;

/// Errors that abort a build.
///
/// Every variant carries the offending path; nothing is retried, and the
/// caller receives the first failure unwrapped.
#[derive(Debug, Error)]
pub enum BuildError {
    /// A source folder could not be listed or classified.
    #[error(transparent)]
    Scan(#[from] ScanError),
    /// The input root could not be inspected.
    #[error("cannot access input root '{}': {source}", .path.display())]
    RootAccess {
        /// Input root that failed inspection.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        source: io::Error,
    },
    /// The input root exists but is not a directory.
    #[error("input root '{}' is not a directory", .path.display())]
    RootNotDirectory {
        /// Offending input root.
        path: PathBuf,
    },
    /// A destination path exists but is not a directory.
    #[error("'{}' exists but is not a directory", .path.display())]
    PathConflict {
        /// Conflicting destination path.
        path: PathBuf,
    },
    /// A destination directory could not be created.
    #[error("failed to create directory '{}': {source}", .path.display())]
    CreateDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        source: io::Error,
    },
    /// A generated script could not be written.
    #[error("failed to write script '{}': {source}", .path.display())]
    WriteScript {
        /// Script path that could not be written.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        source: io::Error,
    },
}

impl BuildError {
    /// Returns the filesystem path associated with the error.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Scan(error) => error.path(),
            Self::RootAccess { path, .. }
            | Self::RootNotDirectory { path }
            | Self::PathConflict { path }
            | Self::CreateDir { path, .. }
            | Self::WriteScript { path, .. } => path,
        }
    }
}
