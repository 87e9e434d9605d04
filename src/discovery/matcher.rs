//! File matching functionality
//!
//! This module contains the compiled glob set entry names are tested against.

use glob::{MatchOptions, Pattern};
use log::trace;

use crate::errors::{glob_pattern_error, Result};

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// A list of glob patterns with match-any semantics
#[derive(Debug, Clone)]
pub struct PatternSet {
    patterns: Vec<Pattern>,
}

impl PatternSet {
    /// Compiles every pattern
    ///
    /// # Errors
    /// Returns an error naming the first pattern that is not a valid glob
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(|p| {
                let p = p.as_ref();
                Pattern::new(p).map_err(|e| glob_pattern_error(e, p))
            })
            .collect::<Result<Vec<Pattern>>>()?;

        Ok(PatternSet { patterns })
    }

    /// Checks whether `name` matches any pattern in the set
    pub fn is_match(&self, name: &str) -> bool {
        let matched = self
            .patterns
            .iter()
            .any(|pattern| pattern.matches_with(name, MATCH_OPTIONS));
        trace!("{name}: {}", if matched { "match" } else { "no match" });
        matched
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;

    #[test]
    fn test_match_any() {
        let set = PatternSet::new(&["a*", "b*"]).unwrap();
        assert!(set.is_match("apple.txt"));
        assert!(set.is_match("banana.txt"));
        assert!(!set.is_match("cherry.txt"));
    }

    #[test]
    fn test_glob_syntax() {
        let set = PatternSet::new(&["img_??.[jp]*"]).unwrap();
        assert!(set.is_match("img_01.jpg"));
        assert!(set.is_match("img_02.png"));
        assert!(!set.is_match("img_1.jpg"));
        assert!(!set.is_match("img_01.gif"));
    }

    #[test]
    fn test_case_sensitive() {
        let set = PatternSet::new(&["*.txt"]).unwrap();
        assert!(!set.is_match("README.TXT"));
    }

    #[test]
    fn test_leading_dot_matches_star() {
        let set = PatternSet::new(&["*"]).unwrap();
        assert!(set.is_match(".hidden"));
    }

    #[test]
    fn test_invalid_pattern_reported_at_construction() {
        let result = PatternSet::new(&["*.txt", "[abc"]);
        match result {
            Err(Error::GlobPattern { pattern, .. }) => assert_eq!(pattern, "[abc"),
            other => panic!("expected a glob pattern error, got {other:?}"),
        }
    }
}
