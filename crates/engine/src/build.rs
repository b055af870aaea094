use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{error, info};
use walk::{Folder, ScanQueue, ScriptPolicy, scan_folder};

use crate::error::{BuildError, BuildResult};
use crate::generate::generate_all;
use crate::write::{ensure_dir, write_folder};

/// Knobs for one build invocation.
#[derive(Clone, Copy, Debug, Default)]
pub struct BuildOptions {
    /// Persist scripts and mirror the destination tree. When false the build
    /// stops after scanning and generating and touches nothing on disk.
    pub write: bool,
    /// Emit info-level progress events and log the terminal error before
    /// returning. Informational only; the result is identical either way.
    pub verbose: bool,
}

impl BuildOptions {
    /// Creates the default dry-run options.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            write: false,
            verbose: false,
        }
    }

    /// Configures whether the write phase runs.
    #[must_use]
    pub const fn write(mut self, write: bool) -> Self {
        self.write = write;
        self
    }

    /// Configures progress reporting.
    #[must_use]
    pub const fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

/// Runs one build: scan the tree under `input_root`, generate every folder's
/// script, and, when requested, persist scripts and mirror the destination
/// tree.
///
/// `input_root` must be an existing directory; it is absolutized against the
/// current directory, after which no filesystem operation depends on ambient
/// state. `output_root` resolves against the input root when relative, and
/// the destination tree is rooted at `output_root` joined with the input
/// root's file name. The returned records are in breadth-first scan order.
pub fn build(
    input_root: &Path,
    output_root: &Path,
    script_name: &str,
    policy: &dyn ScriptPolicy,
    options: BuildOptions,
) -> BuildResult<Vec<Folder>> {
    let result = run_build(input_root, output_root, script_name, policy, options);
    if options.verbose
        && let Err(error) = &result
    {
        error!(%error, "build aborted");
    }
    result
}

fn run_build(
    input_root: &Path,
    output_root: &Path,
    script_name: &str,
    policy: &dyn ScriptPolicy,
    options: BuildOptions,
) -> BuildResult<Vec<Folder>> {
    let input_root = resolve_input_root(input_root)?;
    let output_root = if output_root.is_absolute() {
        output_root.to_path_buf()
    } else {
        input_root.join(output_root)
    };

    if options.verbose {
        info!(
            input = %input_root.display(),
            output = %output_root.display(),
            write = options.write,
            "starting build"
        );
    }

    if options.write {
        ensure_dir(&output_root)?;
    }

    // The destination tree mirrors the input root under the output root; an
    // input root with no final component falls back to the output root.
    let destination_root = match input_root.file_name() {
        Some(base) => output_root.join(base),
        None => output_root.clone(),
    };

    let mut queue = ScanQueue::new();
    queue.enqueue(input_root, destination_root.clone());
    let mut folders = scan_all(&mut queue, script_name, policy, options.verbose)?;

    if options.verbose {
        info!(folders = folders.len(), "generating scripts");
    }
    generate_all(&mut folders, policy);

    if options.write {
        ensure_dir(&destination_root)?;
        if options.verbose {
            info!("writing scripts and mirroring destination folders");
        }
        for folder in &folders {
            write_folder(folder)?;
        }
    }

    Ok(folders)
}

/// Drains the queue to completion, one record per dequeued pair.
///
/// On scan failure the queue is cleared before the error propagates, so a
/// failed build never leaves pending items behind.
pub(crate) fn scan_all(
    queue: &mut ScanQueue,
    script_name: &str,
    policy: &dyn ScriptPolicy,
    verbose: bool,
) -> BuildResult<Vec<Folder>> {
    let mut folders = Vec::new();
    while let Some(item) = queue.dequeue() {
        if verbose {
            info!(folder = %item.source.display(), "scanning");
        }
        match scan_folder(queue, &item.source, &item.destination, script_name, policy) {
            Ok(folder) => folders.push(folder),
            Err(error) => {
                queue.clear();
                return Err(error.into());
            }
        }
    }
    Ok(folders)
}

fn resolve_input_root(input_root: &Path) -> BuildResult<PathBuf> {
    let input_root = if input_root.is_absolute() {
        input_root.to_path_buf()
    } else {
        let cwd = env::current_dir().map_err(|source| BuildError::RootAccess {
            path: input_root.to_path_buf(),
            source,
        })?;
        cwd.join(input_root)
    };

    let metadata = fs::metadata(&input_root).map_err(|source| BuildError::RootAccess {
        path: input_root.clone(),
        source,
    })?;
    if !metadata.is_dir() {
        return Err(BuildError::RootNotDirectory { path: input_root });
    }
    Ok(input_root)
}
