use std::path::PathBuf;

use crate::entry::FileEntry;

/// Scan result for one visited source folder.
///
/// The scanner creates the record and fills `files` and `children`; the
/// generator sets `script` exactly once; the writer reads everything back.
/// Records belong to the build that produced them and are returned to the
/// caller in breadth-first visitation order.
#[derive(Clone, Debug)]
pub struct Folder {
    /// Absolute source path of the folder.
    pub source: PathBuf,
    /// Computed absolute destination path, mirroring the filtered source
    /// structure under the output root.
    pub destination: PathBuf,
    /// File name of the generated script, constant across one build.
    pub script_name: String,
    /// Generated script text; empty until the generation phase runs.
    pub script: String,
    /// Files the policy kept, in directory-listing order.
    pub files: Vec<FileEntry>,
    /// Source paths of subfolders the policy kept, in directory-listing order.
    pub children: Vec<PathBuf>,
}

impl Folder {
    /// Creates an empty record for a folder about to be scanned.
    #[must_use]
    pub fn new<P, Q>(source: P, destination: Q, script_name: &str) -> Self
    where
        P: Into<PathBuf>,
        Q: Into<PathBuf>,
    {
        Self {
            source: source.into(),
            destination: destination.into(),
            script_name: script_name.to_owned(),
            script: String::new(),
            files: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Absolute path the generated script is written to.
    #[must_use]
    pub fn script_path(&self) -> PathBuf {
        self.source.join(&self.script_name)
    }
}
