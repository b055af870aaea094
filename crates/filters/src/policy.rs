use std::ffi::OsString;

use walk::{FileEntry, Folder, ScriptPolicy};

use crate::FilterSet;

/// Command emitted for each selected file.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum FileCommand {
    /// Copy the file into the destination folder.
    #[default]
    Copy,
    /// Move the file into the destination folder.
    Move,
}

impl FileCommand {
    const fn program(self) -> &'static str {
        match self {
            Self::Copy => "cp",
            Self::Move => "mv",
        }
    }
}

/// The selection policy the command-line tool wires into a build.
///
/// Keeps an entry when its name passes the rule set and is not one of the
/// build's own artifacts; formats one shell command per kept file, targeting
/// the folder's destination. Skipping artifacts by name is what keeps a
/// rebuild over already-generated output stable: the generated script and
/// the output root never re-enter the scan.
#[derive(Clone, Debug)]
pub struct CommandPolicy {
    filters: FilterSet,
    command: FileCommand,
    skip_names: Vec<OsString>,
}

impl CommandPolicy {
    /// Creates a policy applying `filters` and emitting `command` lines.
    #[must_use]
    pub fn new(filters: FilterSet, command: FileCommand) -> Self {
        Self {
            filters,
            command,
            skip_names: Vec::new(),
        }
    }

    /// Adds a file name the policy always drops, regardless of rules.
    ///
    /// Builds register their script name and output root name here.
    #[must_use]
    pub fn skip_name(mut self, name: impl Into<OsString>) -> Self {
        self.skip_names.push(name.into());
        self
    }
}

impl ScriptPolicy for CommandPolicy {
    fn keep(&self, entry: &FileEntry) -> bool {
        let Some(name) = entry.file_name() else {
            return false;
        };
        if self.skip_names.iter().any(|skip| skip.as_os_str() == name) {
            return false;
        }
        self.filters.allows(name)
    }

    fn format(&self, file: &FileEntry, folder: &Folder) -> String {
        let name = file.file_name().unwrap_or_default();
        format!(
            "{} \"{}\" \"{}\"\n",
            self.command.program(),
            name.display(),
            folder.destination.display()
        )
    }
}
