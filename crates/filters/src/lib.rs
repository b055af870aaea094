#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `filters` supplies the concrete selection policy the mirrorgen command-line
//! tool plugs into the scan engine. Callers describe what to keep with an
//! ordered list of include/exclude glob rules; the crate compiles them into a
//! [`FilterSet`] and wraps the set in a [`CommandPolicy`] that also knows how
//! to render one copy or move command per selected file.
//!
//! # Design
//!
//! - [`FilterRule`] captures the user-supplied action (`Include`/`Exclude`)
//!   and pattern text. The rule itself is lightweight; compilation happens
//!   when a [`FilterSet`] is constructed.
//! - [`FilterSet`] owns the compiled glob matchers. Rules are evaluated in
//!   definition order against an entry's file name; the first matching rule
//!   decides, and entries no rule matches are included by default.
//! - [`CommandPolicy`] implements [`walk::ScriptPolicy`]: it drops the build's
//!   own artifacts (the generated script and the output root, by name) before
//!   consulting the rule set, and formats `cp`/`mv` lines that target the
//!   folder's destination.
//!
//! # Invariants
//!
//! - Rule order is significant: the first matching rule wins.
//! - An empty rule list keeps everything.
//! - The policy never re-selects generated artifacts, so re-running a build
//!   over its own output directory stays stable.
//!
//! # Errors
//!
//! [`FilterSet::from_rules`] reports [`FilterError`] when a pattern is not a
//! valid glob. The error carries the offending pattern and the underlying
//! [`globset::Error`].
//!
//! # Examples
//!
//! ```
//! use filters::{FilterRule, FilterSet};
//! use std::ffi::OsStr;
//!
//! let rules = [
//!     FilterRule::exclude("*.swp"),
//!     FilterRule::exclude("Thumbs.db"),
//! ];
//! let set = FilterSet::from_rules(rules).expect("rules compile");
//!
//! assert!(set.allows(OsStr::new("movie.mkv")));
//! assert!(!set.allows(OsStr::new("movie.swp")));
//! ```

mod action;
mod error;
mod policy;
mod rule;
mod set;

pub use action::RuleAction;
pub use error::FilterError;
pub use policy::{CommandPolicy, FileCommand};
pub use rule::FilterRule;
pub use set::FilterSet;
