//! Search configuration
//!
//! This module contains the immutable settings a [`Searcher`](super::Searcher)
//! is built from.

use crate::constants::{DEFAULT_PATTERN, PATTERN_SEPARATOR, UNBOUNDED_DEPTH};
use crate::errors::{invalid_depth_error, Error, Result};

/// How far below the root directory the walk may descend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Depth {
    /// Visit every level
    #[default]
    Unbounded,
    /// Descend at most this many directory levels below the root
    Limited(usize),
}

impl Depth {
    /// Converts the command-line representation, where `-1` means no limit
    ///
    /// # Errors
    /// Returns an error for any value below `-1` or too large for the platform
    pub fn from_signed(value: i64) -> Result<Self> {
        match value {
            UNBOUNDED_DEPTH => Ok(Depth::Unbounded),
            v if v < UNBOUNDED_DEPTH => Err(invalid_depth_error(v)),
            v => usize::try_from(v)
                .map(Depth::Limited)
                .map_err(|_| invalid_depth_error(v)),
        }
    }

    /// Deepest walk depth at which entries are still tested
    ///
    /// Direct children of the root sit at walk depth 1.
    pub(crate) fn max_walk_depth(&self) -> usize {
        match self {
            Depth::Unbounded => usize::MAX,
            Depth::Limited(levels) => levels.saturating_add(1),
        }
    }
}

/// Which kinds of directory entries are rename candidates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryKind {
    /// Regular files and symlinks; directories are walked but never matched
    #[default]
    Files,
    /// Directories are matched against the patterns too
    FilesAndDirectories,
}

/// Settings for a directory search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    patterns: Vec<String>,
    depth: Depth,
    entry_kind: EntryKind,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            patterns: vec![DEFAULT_PATTERN.to_string()],
            depth: Depth::Unbounded,
            entry_kind: EntryKind::Files,
        }
    }
}

impl SearchConfig {
    /// Creates a configuration matching any of `patterns`
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        SearchConfig {
            patterns: patterns.into_iter().map(Into::into).collect(),
            ..SearchConfig::default()
        }
    }

    /// Creates a configuration from a comma-separated match expression
    ///
    /// Each segment is trimmed and blank segments are dropped, so
    /// `" *.txt, "` is the same as `"*.txt"`. Patterns therefore cannot
    /// start or end with a space.
    ///
    /// # Errors
    /// Returns an error when no pattern is left
    pub fn from_match_expression(expression: &str) -> Result<Self> {
        let patterns: Vec<&str> = expression
            .split(PATTERN_SEPARATOR)
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect();

        if patterns.is_empty() {
            return Err(Error::EmptyPatternList);
        }

        Ok(SearchConfig::new(patterns))
    }

    pub fn depth(mut self, depth: Depth) -> Self {
        self.depth = depth;
        self
    }

    pub fn entry_kind(mut self, entry_kind: EntryKind) -> Self {
        self.entry_kind = entry_kind;
        self
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn max_depth(&self) -> Depth {
        self.depth
    }

    pub fn kind(&self) -> EntryKind {
        self.entry_kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_from_signed() {
        assert_eq!(Depth::from_signed(-1).unwrap(), Depth::Unbounded);
        assert_eq!(Depth::from_signed(0).unwrap(), Depth::Limited(0));
        assert_eq!(Depth::from_signed(3).unwrap(), Depth::Limited(3));
        assert!(matches!(
            Depth::from_signed(-2),
            Err(Error::InvalidDepth { value: -2 })
        ));
    }

    #[test]
    fn test_depth_beyond_usize_rejected() {
        match usize::try_from(i64::MAX) {
            Ok(levels) => {
                assert_eq!(Depth::from_signed(i64::MAX).unwrap(), Depth::Limited(levels));
            }
            Err(_) => assert!(matches!(
                Depth::from_signed(i64::MAX),
                Err(Error::InvalidDepth { value: i64::MAX })
            )),
        }
    }

    #[test]
    fn test_max_walk_depth() {
        assert_eq!(Depth::Limited(0).max_walk_depth(), 1);
        assert_eq!(Depth::Limited(2).max_walk_depth(), 3);
        assert_eq!(Depth::Unbounded.max_walk_depth(), usize::MAX);
    }

    #[test]
    fn test_from_match_expression() {
        let config = SearchConfig::from_match_expression("a*, b* ,,").unwrap();
        assert_eq!(config.patterns(), &["a*".to_string(), "b*".to_string()]);

        assert!(matches!(
            SearchConfig::from_match_expression(" , "),
            Err(Error::EmptyPatternList)
        ));
    }

    #[test]
    fn test_defaults() {
        let config = SearchConfig::default();
        assert_eq!(config.patterns(), &["*".to_string()]);
        assert_eq!(config.max_depth(), Depth::Unbounded);
        assert_eq!(config.kind(), EntryKind::Files);
    }
}
