use crate::entry::FileEntry;
use crate::folder::Folder;

/// Caller-supplied filter/format pair steering a build.
///
/// Both operations are pure: `keep` decides inclusion from the entry alone,
/// and `format` renders command text without mutating the folder record. The
/// scanner consults `keep` for every immediate entry of every visited folder;
/// the generator calls `format` once per kept file.
pub trait ScriptPolicy {
    /// Returns whether `entry` should appear in the scan result.
    ///
    /// Entries rejected here are dropped entirely: files never reach the
    /// generated script, subfolders are never descended into.
    fn keep(&self, entry: &FileEntry) -> bool;

    /// Renders the script text for one kept file.
    ///
    /// The returned text is appended to the folder's script verbatim, so
    /// implementations terminate their lines themselves. `folder` is the
    /// record the file belongs to; formatters typically reference
    /// [`Folder::destination`].
    fn format(&self, file: &FileEntry, folder: &Folder) -> String;
}

/// Policy that keeps every entry and renders no command text.
///
/// Useful for structure-only scans where only the folder records matter.
#[derive(Clone, Copy, Debug, Default)]
pub struct KeepAll;

impl ScriptPolicy for KeepAll {
    fn keep(&self, _entry: &FileEntry) -> bool {
        true
    }

    fn format(&self, _file: &FileEntry, _folder: &Folder) -> String {
        String::new()
    }
}
