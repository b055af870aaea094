use std::fs;
use std::path::Path;

use tracing::{debug, trace};

use crate::entry::FileEntry;
use crate::error::ScanError;
use crate::folder::Folder;
use crate::policy::ScriptPolicy;
use crate::queue::ScanQueue;

/// Scans one folder's immediate entries and returns its populated record.
///
/// Lists `source` without recursing, asks `policy` whether to keep each
/// entry, records kept files on the returned [`Folder`], and enqueues kept
/// subfolders on `queue` with their destination computed as
/// `destination.join(entry file name)`. Entries the policy rejects are
/// dropped entirely.
///
/// All paths are taken and produced absolute; the process working directory
/// is never consulted or changed.
pub fn scan_folder(
    queue: &mut ScanQueue,
    source: &Path,
    destination: &Path,
    script_name: &str,
    policy: &dyn ScriptPolicy,
) -> Result<Folder, ScanError> {
    let listing =
        fs::read_dir(source).map_err(|error| ScanError::read_dir(source.to_path_buf(), error))?;

    debug!(folder = %source.display(), "scanning folder");
    let mut folder = Folder::new(source, destination, script_name);

    for entry in listing {
        let entry =
            entry.map_err(|error| ScanError::read_dir_entry(source.to_path_buf(), error))?;
        let name = entry.file_name();
        let path = source.join(&name);
        let file_type = entry
            .file_type()
            .map_err(|error| ScanError::file_type(path.clone(), error))?;
        let entry = FileEntry::new(path, file_type.is_dir());

        if !policy.keep(&entry) {
            trace!(entry = %entry.path.display(), "dropped by policy");
            continue;
        }

        if entry.is_dir {
            let child_destination = destination.join(&name);
            trace!(
                child = %entry.path.display(),
                destination = %child_destination.display(),
                "subfolder selected"
            );
            queue.enqueue(entry.path.clone(), child_destination);
            folder.children.push(entry.path);
        } else {
            trace!(file = %entry.path.display(), "file selected");
            folder.files.push(entry);
        }
    }

    debug!(
        folder = %folder.source.display(),
        files = folder.files.len(),
        children = folder.children.len(),
        "folder scanned"
    );
    Ok(folder)
}
