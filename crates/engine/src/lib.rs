#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `engine` drives a whole mirrorgen build over the records produced by the
//! [`walk`] crate. A build runs in strictly sequential phases: resolve the
//! roots, scan the source tree breadth-first into [`walk::Folder`] records,
//! generate every folder's script text, and, only when persistence was
//! requested, write the scripts into their source folders while mirroring
//! the filtered tree under the output root.
//!
//! Scanning, generation, and writing never interleave. The scan phase touches
//! the filesystem read-only, generation is pure string work over the records,
//! and the write phase is the only part that mutates disk. A build invoked
//! without the write flag returns the in-memory records untouched, which is
//! the dry-run/introspection mode.
//!
//! # Design
//!
//! - [`build`] owns the per-invocation [`walk::ScanQueue`] and the record
//!   sequence; nothing is shared between invocations, so builds are
//!   re-entrant within one process.
//! - [`generate`] renders one folder's script: a policy-formatted line per
//!   selected file, then a fixed three-line block per selected child that
//!   enters the child, runs the child's identically-named script, and
//!   returns. Each script is self-contained, so running the root script
//!   transitively executes every descendant's script.
//! - [`write_folder`] persists one record: the script goes into the source
//!   folder under the constant script name (overwriting any previous run's
//!   output), and the destination folder is created when absent.
//!
//! # Invariants
//!
//! - Generation order and write order both equal scan order.
//! - [`generate`] is idempotent: regenerating a record with the same policy
//!   produces identical text.
//! - The scan queue is empty whenever [`build`] returns, also on error.
//! - A folder with nothing selected still yields (and persists) an empty
//!   script, and its destination folder is still mirrored.
//!
//! # Errors
//!
//! [`BuildError`] covers root resolution failures, scan failures (wrapping
//! [`walk::ScanError`]), destination conflicts where a mirrored path exists
//! but is not a directory, and script write failures. Every variant names
//! the offending path. No phase retries; the first error aborts the build,
//! and output already written stays on disk.
//!
//! # Examples
//!
//! Dry-run a build and inspect the generated scripts without touching disk:
//!
//! ```
//! use engine::{BuildOptions, build};
//! use walk::KeepAll;
//! use std::fs;
//!
//! # fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let temp = tempfile::tempdir()?;
//! let root = temp.path().join("library");
//! fs::create_dir(&root)?;
//! fs::write(root.join("index.txt"), b"data")?;
//!
//! let folders = build(&root, "gen".as_ref(), "run", &KeepAll, BuildOptions::new())?;
//! assert_eq!(folders.len(), 1);
//! assert!(folders[0].script.is_empty());
//! # Ok(())
//! # }
//! # demo().unwrap();
//! ```

mod build;
mod error;
mod generate;
mod write;

pub use build::{BuildOptions, build};
pub use error::{BuildError, BuildResult};
pub use generate::generate;
pub use write::{ensure_dir, write_folder};
