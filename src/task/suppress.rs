//! Warning suppression filter.

use regex::Regex;

/// Suppression patterns compiled once per task run.
///
/// A warning is suppressed when any pattern matches its message; matching is
/// unanchored and order-independent, the first hit suffices.
#[derive(Debug, Default)]
pub struct WarningFilter {
    patterns: Vec<Regex>,
}

impl WarningFilter {
    pub fn new<I, S>(patterns: I) -> Result<Self, regex::Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .map(|pattern| Regex::new(pattern.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { patterns })
    }

    pub fn is_suppressed(&self, message: &str) -> bool {
        self.patterns.iter().any(|pattern| pattern.is_match(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filter_suppresses_nothing() {
        let filter = WarningFilter::new(Vec::<String>::new()).unwrap();
        assert!(!filter.is_suppressed("any warning at all"));
    }

    #[test]
    fn literal_and_regex_patterns_both_match() {
        let filter = WarningFilter::new(["critical dependency", r"chunk \d+ too large"]).unwrap();

        assert!(filter.is_suppressed("warning: critical dependency in module"));
        assert!(filter.is_suppressed("chunk 42 too large"));
        assert!(!filter.is_suppressed("unrelated message"));
    }

    #[test]
    fn invalid_pattern_is_rejected_at_compile_time() {
        assert!(WarningFilter::new(["(unclosed"]).is_err());
    }
}
