use std::ffi::OsStr;
use std::path::Path;

use globset::{Glob, GlobMatcher};

use crate::{FilterError, FilterRule, RuleAction};

/// Compiled, immutable collection of filter rules.
///
/// Rules are evaluated in definition order against an entry's file name; the
/// first matching rule decides whether the entry is kept. Names no rule
/// matches are included by default, so an empty set keeps everything.
#[derive(Clone, Debug, Default)]
pub struct FilterSet {
    rules: Vec<CompiledRule>,
}

#[derive(Clone, Debug)]
struct CompiledRule {
    action: RuleAction,
    matcher: GlobMatcher,
}

impl FilterSet {
    /// Builds a [`FilterSet`] from the supplied rules.
    ///
    /// Rules are compiled in iteration order, which is also their evaluation
    /// order.
    pub fn from_rules<I>(rules: I) -> Result<Self, FilterError>
    where
        I: IntoIterator<Item = FilterRule>,
    {
        let rules = rules
            .into_iter()
            .map(|rule| {
                let glob = Glob::new(rule.pattern())
                    .map_err(|error| FilterError::new(rule.pattern().to_owned(), error))?;
                Ok(CompiledRule {
                    action: rule.action(),
                    matcher: glob.compile_matcher(),
                })
            })
            .collect::<Result<Vec<_>, FilterError>>()?;
        Ok(Self { rules })
    }

    /// Returns whether an entry with the given file name is kept.
    #[must_use]
    pub fn allows(&self, name: &OsStr) -> bool {
        let candidate = Path::new(name);
        for rule in &self.rules {
            if rule.matcher.is_match(candidate) {
                return rule.action == RuleAction::Include;
            }
        }
        true
    }

    /// Number of compiled rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns whether the set holds no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
