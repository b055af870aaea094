#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `cli` implements the thin command-line front-end for the mirrorgen
//! workspace. It recognises the supported switches (`--output`,
//! `--script-name`, `--include`/`--exclude`, `--move`, `--write`,
//! `--verbose`), assembles the glob-rule policy from the `filters` crate, and
//! delegates the actual work to [`engine::build`]. Without `--write` the tool
//! is a dry run: it scans, generates, and prints a per-folder summary while
//! leaving the filesystem untouched.
//!
//! # Design
//!
//! The crate exposes [`run`] as the primary entry point. The function accepts
//! an iterator of arguments together with handles for standard output and
//! error, so tests can drive the full front-end against in-memory buffers. A
//! [`clap`](https://docs.rs/clap/) builder-API command performs the parse;
//! include and exclude patterns are re-interleaved by argument position so
//! rule order on the command line is rule order in the policy.
//!
//! # Invariants
//!
//! - `run` never panics; parse failures exit with code 1 and build failures
//!   with code 2, each with a diagnostic on standard error.
//! - The generated script name and the output root name are always excluded
//!   from scans, so re-running the tool over its own output is stable.
//!
//! # Examples
//!
//! ```
//! use cli::run;
//!
//! let mut stdout = Vec::new();
//! let mut stderr = Vec::new();
//! let exit_code = run(["mirrorgen", "--help"], &mut stdout, &mut stderr);
//!
//! assert_eq!(exit_code, 0);
//! assert!(!stdout.is_empty());
//! ```

mod frontend;

pub use frontend::run;
