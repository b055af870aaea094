use crate::RuleAction;

/// User-visible filter rule consisting of an action and a glob pattern.
///
/// Patterns match against entry file names, not full paths; `movie *` matches
/// a folder called `movie 01` at any depth.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FilterRule {
    pub(crate) action: RuleAction,
    pub(crate) pattern: String,
}

impl FilterRule {
    /// Creates an include rule for `pattern`.
    #[must_use]
    pub fn include(pattern: impl Into<String>) -> Self {
        Self {
            action: RuleAction::Include,
            pattern: pattern.into(),
        }
    }

    /// Creates an exclude rule for `pattern`.
    #[must_use]
    pub fn exclude(pattern: impl Into<String>) -> Self {
        Self {
            action: RuleAction::Exclude,
            pattern: pattern.into(),
        }
    }

    /// Returns the rule action.
    #[must_use]
    pub const fn action(&self) -> RuleAction {
        self.action
    }

    /// Returns the pattern text associated with the rule.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}
