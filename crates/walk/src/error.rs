use std::error::Error;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Error returned when scanning a folder fails.
///
/// Any scan failure aborts the whole build; the error names the offending
/// path so diagnostics stay actionable without pattern matching.
#[derive(Debug)]
pub struct ScanError {
    kind: ScanErrorKind,
}

impl ScanError {
    pub(crate) fn new(kind: ScanErrorKind) -> Self {
        Self { kind }
    }

    pub(crate) fn read_dir(path: PathBuf, source: io::Error) -> Self {
        Self::new(ScanErrorKind::ReadDir { path, source })
    }

    pub(crate) fn read_dir_entry(path: PathBuf, source: io::Error) -> Self {
        Self::new(ScanErrorKind::ReadDirEntry { path, source })
    }

    pub(crate) fn file_type(path: PathBuf, source: io::Error) -> Self {
        Self::new(ScanErrorKind::FileType { path, source })
    }

    /// Returns the specific failure that aborted the scan.
    #[must_use]
    pub fn kind(&self) -> &ScanErrorKind {
        &self.kind
    }

    /// Returns the filesystem path associated with the error.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.kind.path()
    }
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ScanErrorKind::ReadDir { path, source } => {
                write!(
                    f,
                    "failed to list directory '{}': {}",
                    path.display(),
                    source
                )
            }
            ScanErrorKind::ReadDirEntry { path, source } => {
                write!(
                    f,
                    "failed to read entry in '{}': {}",
                    path.display(),
                    source
                )
            }
            ScanErrorKind::FileType { path, source } => {
                write!(f, "failed to classify '{}': {}", path.display(), source)
            }
        }
    }
}

impl Error for ScanError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.kind {
            ScanErrorKind::ReadDir { source, .. }
            | ScanErrorKind::ReadDirEntry { source, .. }
            | ScanErrorKind::FileType { source, .. } => Some(source),
        }
    }
}

/// Classification of scan failures.
#[derive(Debug)]
pub enum ScanErrorKind {
    /// The folder could not be entered or listed.
    ReadDir {
        /// Directory whose contents could not be listed.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        source: io::Error,
    },
    /// Iteration over the folder's contents failed partway.
    ReadDirEntry {
        /// Directory containing the problematic entry.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        source: io::Error,
    },
    /// An entry could not be classified as file or subfolder.
    FileType {
        /// Entry whose type could not be determined.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        source: io::Error,
    },
}

impl ScanErrorKind {
    /// Returns the filesystem path tied to the failure.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            ScanErrorKind::ReadDir { path, .. }
            | ScanErrorKind::ReadDirEntry { path, .. }
            | ScanErrorKind::FileType { path, .. } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn io_error(message: &'static str) -> io::Error {
        io::Error::other(message)
    }

    #[test]
    fn scan_error_path_matches_variant_path() {
        let read_dir = ScanError::read_dir(PathBuf::from("dir"), io_error("dir"));
        assert_eq!(Path::new("dir"), read_dir.path());

        let read_dir_entry = ScanError::read_dir_entry(PathBuf::from("entry"), io_error("entry"));
        assert_eq!(Path::new("entry"), read_dir_entry.path());

        let file_type = ScanError::file_type(PathBuf::from("node"), io_error("node"));
        assert_eq!(Path::new("node"), file_type.path());
        assert_eq!(file_type.kind().path(), Path::new("node"));
    }

    #[test]
    fn scan_error_display_is_specific_per_variant() {
        let read_dir = ScanError::read_dir(PathBuf::from("dir"), io_error("boom"));
        assert_eq!(
            "failed to list directory 'dir': boom",
            read_dir.to_string()
        );

        let read_dir_entry = ScanError::read_dir_entry(PathBuf::from("dir"), io_error("boom"));
        assert_eq!(
            "failed to read entry in 'dir': boom",
            read_dir_entry.to_string()
        );

        let file_type = ScanError::file_type(PathBuf::from("node"), io_error("boom"));
        assert_eq!("failed to classify 'node': boom", file_type.to_string());
    }

    #[test]
    fn scan_error_source_refers_to_underlying_io_error() {
        let error = ScanError::read_dir(PathBuf::from("dir"), io_error("source"));
        let source_ref = error
            .source()
            .and_then(|err| err.downcast_ref::<io::Error>())
            .expect("scan error should expose the underlying io::Error");
        assert_eq!(source_ref.to_string(), "source");
    }
}
