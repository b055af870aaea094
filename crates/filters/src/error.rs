use thiserror::Error;

/// Error produced when a rule cannot be compiled into a matcher.
#[derive(Debug, Error)]
#[error("failed to compile filter pattern '{pattern}': {source}")]
pub struct FilterError {
    pattern: String,
    #[source]
    source: globset::Error,
}

impl FilterError {
    pub(crate) fn new(pattern: String, source: globset::Error) -> Self {
        Self { pattern, source }
    }

    /// Returns the offending pattern.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

#[cfg(test)]
mod tests {
    use super::FilterError;
    use globset::Glob;
    use std::error::Error as _;

    #[test]
    fn filter_error_preserves_pattern_and_source() {
        let glob_err = Glob::new("[").unwrap_err();
        let error = FilterError::new("[".into(), glob_err);

        assert_eq!(error.pattern(), "[");
        assert!(error.to_string().contains("failed to compile"));
        assert!(error.source().is_some());
    }
}
