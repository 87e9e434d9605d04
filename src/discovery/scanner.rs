//! Directory scanning functionality
//!
//! This module contains the [`Searcher`], which walks a directory tree and
//! collects the entries whose names match the configured patterns.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, trace};
use walkdir::{DirEntry, WalkDir};

use crate::errors::{not_a_directory_error, traversal_error, Error, Result};

use super::matcher::PatternSet;
use super::search_config::{Depth, EntryKind, SearchConfig};

/// Walks a root directory and filters its entries by name
#[derive(Debug, Clone)]
pub struct Searcher {
    patterns: PatternSet,
    depth: Depth,
    entry_kind: EntryKind,
}

impl Searcher {
    /// Creates a searcher from a configuration
    ///
    /// All patterns are compiled here, so an invalid glob fails before any
    /// directory is read.
    ///
    /// # Errors
    /// * Returns an error if any pattern is not a valid glob
    /// * Returns an error if there is no pattern at all
    pub fn new(config: &SearchConfig) -> Result<Self> {
        let patterns = PatternSet::new(config.patterns())?;
        if patterns.is_empty() {
            return Err(Error::EmptyPatternList);
        }
        debug!(
            "Compiled {} pattern(s): {}",
            patterns.len(),
            config.patterns().join(", ")
        );

        Ok(Searcher {
            patterns,
            depth: config.max_depth(),
            entry_kind: config.kind(),
        })
    }

    /// Searches `root` and returns the matching paths in walk order
    ///
    /// Returned paths are `root` joined with the entry's relative path, so a
    /// relative root yields relative paths. Siblings are visited in lexical
    /// order. When directories are candidates, a directory is listed after
    /// its contents.
    ///
    /// # Arguments
    /// * `root` - The directory to search
    ///
    /// # Returns
    /// * `Result<Vec<PathBuf>>` - The matching paths or an error
    ///
    /// # Errors
    /// * Returns an error if `root` does not exist or is not a directory
    /// * Returns an error if any entry cannot be read during the walk
    pub fn search(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let metadata =
            fs::metadata(root).map_err(|e| traversal_error(e, root.to_path_buf()))?;
        if !metadata.is_dir() {
            return Err(not_a_directory_error(root.to_path_buf()));
        }

        debug!("Searching directory: {}", root.display());

        let walker = WalkDir::new(root)
            .min_depth(1)
            .max_depth(self.depth.max_walk_depth())
            .sort_by_file_name()
            .contents_first(self.entry_kind == EntryKind::FilesAndDirectories);

        let mut matches = Vec::new();
        for entry in walker {
            let entry = entry?;
            if self.is_candidate(&entry) {
                trace!("Matched: {}", entry.path().display());
                matches.push(entry.into_path());
            }
        }

        debug!("Found {} matching entries", matches.len());

        Ok(matches)
    }

    /// Checks whether an entry name matches any configured pattern
    pub fn match_filter(&self, name: &str) -> bool {
        self.patterns.is_match(name)
    }

    fn is_candidate(&self, entry: &DirEntry) -> bool {
        if entry.file_type().is_dir() && self.entry_kind == EntryKind::Files {
            return false;
        }

        // Names that are not valid unicode cannot be rewritten, so they never match.
        match entry.file_name().to_str() {
            Some(name) => self.match_filter(name),
            None => {
                debug!("Skipping non-unicode name: {}", entry.path().display());
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{create_dir_all, File};
    use tempfile::tempdir;

    fn names(paths: &[PathBuf], root: &Path) -> Vec<String> {
        paths
            .iter()
            .map(|p| p.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/"))
            .collect()
    }

    #[test]
    fn test_lexical_walk_order() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path();
        create_dir_all(root.join("b")).unwrap();
        File::create(root.join("c.txt")).unwrap();
        File::create(root.join("a.txt")).unwrap();
        File::create(root.join("b").join("inner.txt")).unwrap();

        let searcher = Searcher::new(&SearchConfig::new(["*.txt"])).unwrap();
        let found = searcher.search(root).unwrap();

        assert_eq!(names(&found, root), vec!["a.txt", "b/inner.txt", "c.txt"]);
    }

    #[test]
    fn test_directories_follow_their_contents() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path();
        create_dir_all(root.join("photos")).unwrap();
        File::create(root.join("photos").join("pic.jpg")).unwrap();

        let config = SearchConfig::new(["p*"]).entry_kind(EntryKind::FilesAndDirectories);
        let found = Searcher::new(&config).unwrap().search(root).unwrap();

        assert_eq!(names(&found, root), vec!["photos/pic.jpg", "photos"]);
    }

    #[test]
    fn test_root_is_not_a_candidate() {
        let temp_dir = tempdir().unwrap();
        let config = SearchConfig::default().entry_kind(EntryKind::FilesAndDirectories);
        let found = Searcher::new(&config)
            .unwrap()
            .search(temp_dir.path())
            .unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn test_empty_pattern_list_rejected() {
        let result = Searcher::new(&SearchConfig::new(Vec::<String>::new()));
        assert!(matches!(result, Err(Error::EmptyPatternList)));
    }
}
