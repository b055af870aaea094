#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `walk` provides the breadth-first folder enumeration that feeds mirrorgen's
//! script generator. A [`ScanQueue`] holds (source, destination) pairs awaiting
//! a visit; [`scan_folder`] lists one queued folder's immediate entries, asks
//! the caller-supplied [`ScriptPolicy`] which entries to keep, enqueues kept
//! subfolders for later visits, and returns a populated [`Folder`] record. The
//! queue's FIFO discipline makes the visitation order breadth-first: every
//! folder at a given depth is scanned before any folder one level deeper,
//! independent of tree shape.
//!
//! # Design
//!
//! - [`ScanQueue`] is a plain value owned by one build invocation. Draining it
//!   to completion is the scan phase; nothing about it is shared or global.
//! - [`scan_folder`] operates on explicit absolute paths. It never changes the
//!   process working directory, so several scans can interleave safely within
//!   one process.
//! - [`ScriptPolicy`] is the seam between the engine and the caller: a pure
//!   inclusion predicate plus a per-file command formatter. Implementations
//!   are ordinary values; the engine holds them behind `&dyn ScriptPolicy`.
//! - [`Folder`] and [`FileEntry`] are plain records. The scanner fills them,
//!   the generator adds the script text, the writer reads them back.
//!
//! # Invariants
//!
//! - A folder's `files` and `children` hold exactly the entries the policy
//!   kept, in the order the underlying directory listing produced them. No
//!   re-sorting happens anywhere.
//! - A child's destination equals its parent's destination joined with the
//!   child's file name, computed once at enqueue time.
//! - Entries the policy drops are never enqueued, never recorded, and never
//!   appear in any generated output.
//!
//! # Errors
//!
//! [`scan_folder`] reports [`ScanError`] when a directory cannot be listed or
//! an entry cannot be classified. The error carries the offending path so
//! callers can surface actionable diagnostics; the underlying
//! [`std::io::Error`] is reachable through [`std::error::Error::source`].
//!
//! # Examples
//!
//! Scan a small tree, keeping everything:
//!
//! ```
//! use walk::{KeepAll, ScanQueue, scan_folder};
//! use std::fs;
//!
//! # fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let temp = tempfile::tempdir()?;
//! let root = temp.path().join("library");
//! fs::create_dir(&root)?;
//! fs::create_dir(root.join("albums"))?;
//! fs::write(root.join("index.txt"), b"data")?;
//!
//! let mut queue = ScanQueue::new();
//! queue.enqueue(root.clone(), temp.path().join("out/library"));
//!
//! let mut folders = Vec::new();
//! while let Some(item) = queue.dequeue() {
//!     folders.push(scan_folder(
//!         &mut queue,
//!         &item.source,
//!         &item.destination,
//!         "run",
//!         &KeepAll,
//!     )?);
//! }
//!
//! assert_eq!(folders.len(), 2);
//! assert_eq!(folders[0].files.len(), 1);
//! assert_eq!(folders[0].children, vec![root.join("albums")]);
//! # Ok(())
//! # }
//! # demo().unwrap();
//! ```
//!
//! # See also
//!
//! - `engine` for the generate/write phases that consume [`Folder`] records.
//! - `filters` for the glob-rule [`ScriptPolicy`] the command-line tool uses.

mod entry;
mod error;
mod folder;
mod policy;
mod queue;
mod scanner;

pub use entry::FileEntry;
pub use error::{ScanError, ScanErrorKind};
pub use folder::Folder;
pub use policy::{KeepAll, ScriptPolicy};
pub use queue::{QueueItem, ScanQueue};
pub use scanner::scan_folder;

#[cfg(test)]
mod tests;
