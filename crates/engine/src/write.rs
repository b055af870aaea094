use std::fs;
use std::path::Path;

use tracing::debug;
use walk::Folder;

use crate::error::{BuildError, BuildResult};

/// Persists one folder record.
///
/// Writes the generated script into the source folder under the record's
/// script name, truncating any previous run's output, then mirrors the
/// record's destination directory. On Unix the script is made executable so
/// the parent script's `./name` invocation works as written.
pub fn write_folder(folder: &Folder) -> BuildResult<()> {
    let script_path = folder.script_path();
    debug!(script = %script_path.display(), "writing script");
    fs::write(&script_path, folder.script.as_bytes()).map_err(|source| {
        BuildError::WriteScript {
            path: script_path.clone(),
            source,
        }
    })?;
    make_executable(&script_path)?;

    debug!(destination = %folder.destination.display(), "mirroring destination");
    ensure_dir(&folder.destination)
}

/// Ensures `path` exists as a directory.
///
/// An existing directory is accepted as-is; an existing non-directory is a
/// conflict; an absent path is created. Creation is single-level: a build
/// mirrors parents before children, so the parent always exists by the time
/// a child is written.
pub fn ensure_dir(path: &Path) -> BuildResult<()> {
    match fs::metadata(path) {
        Ok(metadata) if metadata.is_dir() => Ok(()),
        Ok(_) => Err(BuildError::PathConflict {
            path: path.to_path_buf(),
        }),
        Err(_) => fs::create_dir(path).map_err(|source| BuildError::CreateDir {
            path: path.to_path_buf(),
            source,
        }),
    }
}

#[cfg(unix)]
fn make_executable(script_path: &Path) -> BuildResult<()> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(script_path, fs::Permissions::from_mode(0o755)).map_err(|source| {
        BuildError::WriteScript {
            path: script_path.to_path_buf(),
            source,
        }
    })
}

#[cfg(not(unix))]
fn make_executable(_script_path: &Path) -> BuildResult<()> {
    Ok(())
}
