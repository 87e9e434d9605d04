//! Rename plans
//!
//! An ordered list of source/target pairs produced by compiling a path list.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// One planned rename
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameEntry {
    pub source: PathBuf,
    pub target: PathBuf,
}

impl RenameEntry {
    pub fn new(source: PathBuf, target: PathBuf) -> Self {
        RenameEntry { source, target }
    }

    /// Whether applying this entry would change anything
    pub fn is_changed(&self) -> bool {
        self.source != self.target
    }
}

/// Renames in the order they will be applied; each source appears once
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenamePlan {
    entries: Vec<RenameEntry>,
    sources: HashSet<PathBuf>,
}

impl RenamePlan {
    pub fn new() -> Self {
        RenamePlan::default()
    }

    /// Appends an entry unless its source is already planned
    ///
    /// Returns `false` when the entry was a duplicate and has been dropped.
    pub fn push(&mut self, entry: RenameEntry) -> bool {
        if !self.sources.insert(entry.source.clone()) {
            return false;
        }
        self.entries.push(entry);
        true
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RenameEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Target planned for `source`, if any
    pub fn target_of(&self, source: &Path) -> Option<&Path> {
        self.entries
            .iter()
            .find(|entry| entry.source == source)
            .map(|entry| entry.target.as_path())
    }

    /// Number of entries whose target differs from their source
    pub fn changed_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_changed()).count()
    }
}

impl<'a> IntoIterator for &'a RenamePlan {
    type Item = &'a RenameEntry;
    type IntoIter = std::slice::Iter<'a, RenameEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<RenameEntry> for RenamePlan {
    fn from_iter<I: IntoIterator<Item = RenameEntry>>(iter: I) -> Self {
        let mut plan = RenamePlan::new();
        for entry in iter {
            plan.push(entry);
        }
        plan
    }
}
