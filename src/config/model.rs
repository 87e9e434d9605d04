//! Configuration data structures
//!
//! This module contains the data structures for the optional configuration
//! file. Every field is optional; command-line values take precedence.

use std::path::PathBuf;

use serde::Deserialize;

use crate::discovery::{Depth, EntryKind};
use crate::errors::{Error, Result};
use crate::path_gen::RenameRule;
use crate::utils::expand_path;

/// Defaults read from a YAML configuration file
///
/// ```yaml
/// dir: ~/Pictures/holiday
/// patterns: ["*.jpg", "*.png"]
/// depth: 0
/// include_directories: false
/// rename:
///   prefix: "2024_"
/// ```
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Root directory to search
    pub dir: Option<String>,
    /// Glob patterns; an entry matching any of them is renamed
    ///
    /// Surrounding spaces are ignored and blank patterns are dropped.
    pub patterns: Option<Vec<String>>,
    /// Maximum depth, `-1` for no limit
    pub depth: Option<i64>,
    /// Whether directories are renamed too
    pub include_directories: Option<bool>,
    /// How names are rewritten
    pub rename: RenameRule,
}

impl Config {
    /// The root directory with a leading `~` expanded
    pub fn root_dir(&self) -> Option<PathBuf> {
        self.dir.as_deref().map(expand_path)
    }

    /// The configured depth, checked against the unbounded sentinel
    ///
    /// # Errors
    /// Returns an error for a depth below `-1`
    pub fn max_depth(&self) -> Result<Option<Depth>> {
        self.depth.map(Depth::from_signed).transpose()
    }

    pub fn entry_kind(&self) -> Option<EntryKind> {
        self.include_directories.map(|include| {
            if include {
                EntryKind::FilesAndDirectories
            } else {
                EntryKind::Files
            }
        })
    }

    /// Validates the configuration
    ///
    /// # Errors
    /// * Returns an error if the pattern list is present but empty
    /// * Returns an error if the depth is below `-1`
    pub fn validate(&self) -> Result<()> {
        if let Some(patterns) = &self.patterns
            && patterns.iter().all(|p| p.trim().is_empty())
        {
            return Err(Error::EmptyPatternList);
        }

        self.max_depth()?;
        Ok(())
    }
}
